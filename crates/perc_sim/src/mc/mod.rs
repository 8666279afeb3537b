//! Monte Carlo estimation of the percolation threshold.
//!
//! This module drives repeated independent trials. Each trial opens sites
//! of a fresh grid uniformly at random until the system percolates and
//! records the fraction of sites open at that moment; the recorded
//! fractions are then summarised into a mean, a sample standard deviation
//! and a 95% confidence interval.
//!
//! # Architecture
//!
//! ```text
//! ThresholdEstimator
//! ├── EstimatorConfig     (side length, trial count, seed)
//! ├── SimRng              (per-trial random number generation)
//! └── Orchestration
//!     ├── run()           (sequential trials)
//!     ├── run_parallel()  (rayon, one independent RNG per trial)
//!     └── ThresholdEstimate (recorded thresholds, derived statistics)
//! ```
//!
//! # Reproducibility
//!
//! With a configured seed, trial i draws from an RNG seeded with
//! `seed + i`, so sequential and parallel runs produce identical threshold
//! sequences and repeated runs are deterministic.
//!
//! # Examples
//!
//! ```rust
//! use perc_sim::mc::{EstimatorConfig, ThresholdEstimator};
//!
//! let config = EstimatorConfig::builder()
//!     .side(20)
//!     .trials(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let estimate = ThresholdEstimator::new(config).run();
//!
//! println!("mean = {:.4}", estimate.mean());
//! if let Some((lo, hi)) = estimate.confidence_interval() {
//!     println!("95% CI = [{:.4}, {:.4}]", lo, hi);
//! }
//! ```

pub mod config;
pub mod error;
pub mod estimator;

pub use config::{EstimatorConfig, EstimatorConfigBuilder, MAX_SIDE, MAX_TRIALS};
pub use error::ConfigError;
pub use estimator::{ThresholdEstimate, ThresholdEstimator};
