//! Estimate command implementation
//!
//! Runs a Monte Carlo threshold estimation and prints summary statistics.

use tracing::info;

use perc_sim::mc::{EstimatorConfig, ThresholdEstimator};

use crate::Result;

/// Run the estimate command
pub fn run(side: usize, trials: usize, seed: Option<u64>, parallel: bool) -> Result<()> {
    info!("Starting threshold estimation...");
    info!("  Grid: {}x{}", side, side);
    info!("  Trials: {}", trials);
    match seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: entropy"),
    }

    let mut builder = EstimatorConfig::builder().side(side).trials(trials);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let estimator = ThresholdEstimator::new(config);
    let estimate = if parallel {
        info!("Running trials on the rayon thread pool");
        estimator.run_parallel()
    } else {
        estimator.run()
    };

    // A single trial leaves the sample deviation undefined; print NaN as
    // the Java-lineage tools do rather than failing the run.
    let stddev = estimate.std_dev().unwrap_or(f64::NAN);
    let (lo, hi) = estimate
        .confidence_interval()
        .unwrap_or((f64::NAN, f64::NAN));

    println!("mean                    = {}", estimate.mean());
    println!("stddev                  = {}", stddev);
    println!("95% confidence interval = [{}, {}]", lo, hi);

    info!("Estimation complete");
    Ok(())
}
