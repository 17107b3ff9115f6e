//! End-to-end tests for the fts crates
//!
//! Tests complete fuzzify / train / forecast workflows through the facade.

use std::sync::Arc;

use fts_facade::metrics::{rmse, u_statistic};
use fts_facade::prelude::*;
use fts_facade::{persistence, Flr, RecurrencePolicy, Transformation};

fn seasonal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            1000.0 + 150.0 * (t * 2.0 * std::f64::consts::PI / 12.0).sin() + 20.0 * (t * 0.7).cos()
        })
        .collect()
}

fn grid(data: &[f64], partitions: usize) -> Arc<Partitioner> {
    let config = PartitionerConfig::with_partitions(partitions);
    Arc::new(Partitioner::new(&GridPartitioning, data, config).unwrap())
}

#[test]
fn e2e_train_and_forecast_workflow() {
    let data = seasonal(240);
    let (train, test) = data.split_at(200);

    let mut model = ConventionalFts::new(grid(train, 20));
    model.train(train).unwrap();
    let forecast = model.forecast(&test[..test.len() - 1]).unwrap();

    assert_eq!(forecast.len(), test.len() - 1);
    let error = rmse(&test[1..], &forecast);
    assert!(error.is_finite());
    assert!(error < 150.0, "rmse {error} should be well below the amplitude");
}

#[test]
fn e2e_equal_width_bounds_cover_data_range() {
    let data: Vec<f64> = (0..=10).map(f64::from).collect();
    let partitioner = grid(&data, 5);

    assert_eq!(partitioner.len(), 5);
    assert!(partitioner.get(0).unwrap().lower() <= 0.0);
    assert!(partitioner.get(4).unwrap().upper() >= 10.0);
    for set in partitioner.iter() {
        assert!(partitioner.universe().min <= set.lower());
        assert!(partitioner.universe().max >= set.upper());
    }
}

#[test]
fn e2e_values_inside_universe_are_never_unmatched() {
    let data = seasonal(120);
    let partitioner = grid(&data, 15);
    let universe = partitioner.universe();

    let steps = 500;
    for i in 1..steps {
        let v = universe.min + universe.width() * i as f64 / steps as f64;
        match partitioner.fuzzify(v, &FuzzifyOptions::vector()).unwrap() {
            Fuzzified::Vector(memberships) => {
                assert_eq!(memberships.len(), 15);
                assert!(memberships.iter().sum::<f64>() > 0.0, "all-zero vector at {v}");
            }
            other => panic!("expected a vector, got {other:?}"),
        }
    }
}

#[test]
fn e2e_defuzzify_recovers_centroids() {
    let data = seasonal(120);
    let partitioner = grid(&data, 12);

    for set in partitioner.iter() {
        let fuzzified = partitioner.fuzzify(set.centroid(), &FuzzifyOptions::both()).unwrap();
        let recovered = partitioner.defuzzify(&fuzzified, DefuzzifyMode::Both).unwrap();
        assert!(
            (recovered - set.centroid()).abs() < 1e-9,
            "{} recovered as {recovered}",
            set.name()
        );
    }
}

#[test]
fn e2e_boundary_determinism() {
    let data = seasonal(60);
    let partitioner = grid(&data, 8);
    let universe = partitioner.universe();

    for value in [universe.min - 1.0, universe.min - 1e6, f64::NEG_INFINITY] {
        let fuzzified = partitioner.fuzzify(value, &FuzzifyOptions::both()).unwrap();
        assert_eq!(fuzzified, Fuzzified::Both(vec![(partitioner.get(0).unwrap().name().to_string(), 1.0)]));
    }
    for value in [universe.max + 1.0, universe.max + 1e6, f64::INFINITY] {
        let fuzzified = partitioner.fuzzify(value, &FuzzifyOptions::both()).unwrap();
        assert_eq!(fuzzified, Fuzzified::Both(vec![(partitioner.get(7).unwrap().name().to_string(), 1.0)]));
    }
}

#[test]
fn e2e_search_returns_k_distinct_ascending() {
    let data = seasonal(100);
    let partitioner = grid(&data, 25);

    for value in [900.0, 1000.0, 1100.0, 0.0, 5000.0] {
        for k in [1, 3, 7, 25] {
            let found = partitioner.search(value, k);
            assert_eq!(found.len(), k);
            assert!(found.windows(2).all(|w| w[0] < w[1]));
            assert!(found.iter().all(|&ix| ix < 25));
        }
    }
}

#[test]
fn e2e_transitions_to_forecast() {
    let data = seasonal(48);
    let partitioner = grid(&data, 10);

    let fuzzified: Vec<usize> = data
        .iter()
        .map(|&v| partitioner.maximum_index(v, SearchScope::All).unwrap())
        .collect();
    let flrs: Vec<Flr> = fts_facade::flr::generate(&fuzzified, RecurrencePolicy::NonRecurrent);
    assert!(flrs.windows(2).all(|w| w[0] != w[1]));

    let first = flrs[0].describe(&partitioner).unwrap();
    assert!(first.contains(" -> "));

    let mut model = ConventionalFts::new(Arc::clone(&partitioner));
    model.train(&data).unwrap();
    let relation = model.relation().unwrap();
    for flr in &flrs {
        assert_eq!(relation.get(flr.lhs, flr.rhs), 1.0);
    }
}

#[test]
fn e2e_persisted_model_forecasts_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fts.json");
    let data = seasonal(150);

    let differential = Differential::new(1).unwrap();
    let diffs = differential.apply(&data).unwrap();

    let mut model = ConventionalFts::new(grid(&diffs, 14)).with_transformation(differential);
    model.train(&data[..120]).unwrap();
    persistence::save(&model, &path).unwrap();

    let loaded: ConventionalFts = persistence::load(&path).unwrap();
    assert_eq!(
        loaded.forecast(&data[120..]).unwrap(),
        model.forecast(&data[120..]).unwrap()
    );
}

#[test]
fn e2e_batch_equals_sequential() {
    let data = seasonal(300);
    let model = ConventionalFts::new(grid(&data, 18));

    let mut sequential = model.fresh();
    sequential.train(&data[..250]).unwrap();

    let trainer = BatchTrainer::new(BatchConfig::with_batches(6));
    let (batched, report) = trainer.train(&model, &data[..250]).unwrap();
    assert!(report.is_complete());
    assert_eq!(batched.relation(), sequential.relation());

    assert_eq!(
        trainer.forecast(&batched, &data[250..]).unwrap(),
        sequential.forecast(&data[250..]).unwrap()
    );
}

#[test]
fn e2e_model_beats_naive_on_periodic_series() {
    let data: Vec<f64> = (0..200).map(|i| [10.0, 20.0, 30.0, 20.0][i % 4]).collect();
    let partitioner = Arc::new(
        Partitioner::from_sets(vec![
            FuzzySet::triangular("low", 0.0, 10.0, 20.0).unwrap(),
            FuzzySet::triangular("mid", 10.0, 20.0, 30.0).unwrap(),
            FuzzySet::triangular("high", 20.0, 30.0, 40.0).unwrap(),
        ])
        .unwrap(),
    );

    let mut model = ConventionalFts::new(partitioner);
    model.train(&data[..100]).unwrap();
    let forecast = model.forecast(&data[100..]).unwrap();

    // low -> mid and high -> mid are unambiguous
    for (value, predicted) in data[100..].iter().zip(&forecast) {
        if *value != 20.0 {
            assert_eq!(*predicted, 20.0);
        }
    }
    assert!(u_statistic(&data[100..], &forecast) < 1.0);
}
