//! Basic example: partition a series, train a conventional FTS and forecast
//!
//! Run with: RUST_LOG=debug cargo run --example basic -p fts-facade

use std::sync::Arc;

use fts_facade::metrics::{mae, rmse, u_statistic};
use fts_facade::prelude::*;
use fts_facade::Flr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fts_core=info".into()),
        )
        .init();

    // Monthly enrollments with a mild trend
    let data: Vec<f64> = (0..96)
        .map(|i| {
            let t = i as f64;
            13_000.0 + 40.0 * t + 900.0 * (t * std::f64::consts::PI / 6.0).sin()
        })
        .collect();
    let (train, test) = data.split_at(72);

    println!("=== Fuzzy Time Series Example ===\n");

    // 1. Partitioning
    let config = PartitionerConfig::with_partitions(10);
    let partitioner = Arc::new(Partitioner::new(&GridPartitioning, train, config)?);
    println!("1. {partitioner}");

    // 2. Fuzzification
    let value = test[0];
    let fuzzified = partitioner.fuzzify(value, &FuzzifyOptions::both())?;
    println!("2. fuzzify({value:.1}) = {fuzzified:?}");
    println!(
        "   defuzzified back to {:.1}\n",
        partitioner.defuzzify(&fuzzified, DefuzzifyMode::Both)?
    );

    // 3. Training
    let mut model = ConventionalFts::new(Arc::clone(&partitioner));
    model.train(train)?;
    let first = partitioner.maximum_index(train[0], SearchScope::All)?;
    let second = partitioner.maximum_index(train[1], SearchScope::All)?;
    println!("3. first transition: {}", Flr::new(first, second).describe(&partitioner)?);
    println!("{model}");

    // 4. Forecasting one step ahead
    let inputs = &test[..test.len() - 1];
    let forecast = model.forecast(inputs)?;
    let actual = &test[1..];
    println!("4. Forecast: {:?}", &forecast[..5]);
    println!(
        "   MAE {:.2}, RMSE {:.2}, U {:.3}\n",
        mae(actual, &forecast),
        rmse(actual, &forecast),
        u_statistic(actual, &forecast)
    );

    // 5. Batch training over the full history
    let trainer = BatchTrainer::new(BatchConfig::with_batches(4));
    let (batched, report) = trainer.train(&model, &data)?;
    println!(
        "5. Batch training: {}/{} batches succeeded, trained = {}",
        report.succeeded,
        report.batches,
        batched.is_trained()
    );

    Ok(())
}
