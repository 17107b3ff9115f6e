//! Spatial index over fuzzy set supports
//!
//! A 3-d k-d tree over `(lower, centroid, upper)` points. A query value `v`
//! is embedded as `(v, v, v)`, so the nearest points are the sets whose
//! support sits closest around `v`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

const DIMENSIONS: usize = 3;

#[derive(Debug, Clone)]
struct Node {
    point: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Squared distance to a point, ordered by distance then point id
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    point: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.point.cmp(&other.point))
    }
}

/// k-d tree answering k-nearest-set queries
///
/// @complexity O(n log n) build, O(log n + k) expected query
/// @thread_safe true (immutable after build)
#[derive(Debug, Clone)]
pub struct SetIndex {
    points: Vec<[f64; DIMENSIONS]>,
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl SetIndex {
    /// Build the tree; point ids are positions in `points`
    pub fn build(points: Vec<[f64; DIMENSIONS]>) -> Self {
        let mut ids: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::with_capacity(points.len());
        let root = Self::build_subtree(&points, &mut ids, 0, &mut nodes);

        Self {
            points,
            nodes,
            root,
        }
    }

    fn build_subtree(
        points: &[[f64; DIMENSIONS]],
        ids: &mut [usize],
        depth: usize,
        nodes: &mut Vec<Node>,
    ) -> Option<usize> {
        if ids.is_empty() {
            return None;
        }

        let axis = depth % DIMENSIONS;
        let median = ids.len() / 2;
        ids.select_nth_unstable_by(median, |&a, &b| {
            points[a][axis].total_cmp(&points[b][axis]).then(a.cmp(&b))
        });

        let node_id = nodes.len();
        nodes.push(Node {
            point: ids[median],
            axis,
            left: None,
            right: None,
        });

        let (left_ids, rest) = ids.split_at_mut(median);
        let left = Self::build_subtree(points, left_ids, depth + 1, nodes);
        let right = Self::build_subtree(points, &mut rest[1..], depth + 1, nodes);
        nodes[node_id].left = left;
        nodes[node_id].right = right;

        Some(node_id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ids of the `k` points nearest to `query`, ascending by id
    ///
    /// Returns every id when `k` exceeds the number of points. Equidistant
    /// points are resolved in favour of the lower id.
    pub fn nearest(&self, query: [f64; DIMENSIONS], k: usize) -> Vec<usize> {
        let k = k.min(self.points.len());
        let mut heap = BinaryHeap::with_capacity(k + 1);
        if let Some(root) = self.root {
            if k > 0 {
                self.search(root, &query, k, &mut heap);
            }
        }

        let mut ids: Vec<usize> = heap.into_iter().map(|c| c.point).collect();
        ids.sort_unstable();
        ids
    }

    fn search(
        &self,
        node_id: usize,
        query: &[f64; DIMENSIONS],
        k: usize,
        heap: &mut BinaryHeap<Candidate>,
    ) {
        let node = &self.nodes[node_id];
        let point = &self.points[node.point];

        let candidate = Candidate {
            distance: squared_distance(point, query),
            point: node.point,
        };
        if heap.len() < k {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            heap.pop();
            heap.push(candidate);
        }

        let diff = query[node.axis] - point[node.axis];
        let (near, far) = if diff <= 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, query, k, heap);
        }
        if let Some(far) = far {
            let worst = heap.peek().map_or(f64::INFINITY, |c| c.distance);
            if heap.len() < k || diff * diff <= worst {
                self.search(far, query, k, heap);
            }
        }
    }
}

fn squared_distance(a: &[f64; DIMENSIONS], b: &[f64; DIMENSIONS]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
