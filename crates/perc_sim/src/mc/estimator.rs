//! Threshold estimation over repeated independent trials.

use rayon::prelude::*;

use perc_core::stats;

use super::config::EstimatorConfig;
use crate::grid::Percolation;
use crate::rng::SimRng;

/// Monte Carlo percolation threshold estimator.
///
/// Owns a validated [`EstimatorConfig`] and runs the configured number of
/// independent trials, each on a fresh grid with its own random source. No
/// state is shared between trials.
///
/// # Trial Procedure
///
/// Each trial opens sites of a fresh n×n grid by rejection sampling: draw
/// `(row, col)` uniformly from `[1, n]²`, discard draws that hit an
/// already-open site, and repeat until the system percolates. The trial
/// records the fraction of sites open at that moment. Redundant draws are
/// deliberate (the draw is not a shuffled permutation walk); their expected
/// number stays small because percolation occurs near 59% occupancy, far
/// from a full grid.
///
/// # Examples
///
/// ```rust
/// use perc_sim::mc::{EstimatorConfig, ThresholdEstimator};
///
/// let config = EstimatorConfig::builder()
///     .side(10)
///     .trials(20)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let estimate = ThresholdEstimator::new(config).run();
/// assert_eq!(estimate.trials(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct ThresholdEstimator {
    config: EstimatorConfig,
}

impl ThresholdEstimator {
    /// Creates an estimator from a validated configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this estimator runs with.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Runs all trials sequentially and returns the recorded estimate.
    ///
    /// Trial i draws from an RNG seeded with `seed + i` when a seed is
    /// configured, so the result is reproducible and identical to
    /// [`run_parallel`](Self::run_parallel) for the same configuration.
    pub fn run(&self) -> ThresholdEstimate {
        let thresholds = (0..self.config.trials())
            .map(|trial| self.run_trial(self.trial_rng(trial)))
            .collect();
        ThresholdEstimate::new(self.config.side(), thresholds)
    }

    /// Runs all trials on the rayon thread pool and returns the recorded
    /// estimate.
    ///
    /// Every trial owns an independent RNG, so no generator state is shared
    /// across threads, and results are collected in trial order regardless
    /// of scheduling. With a configured seed the threshold sequence equals
    /// the sequential one.
    pub fn run_parallel(&self) -> ThresholdEstimate {
        let thresholds = (0..self.config.trials())
            .into_par_iter()
            .map(|trial| self.run_trial(self.trial_rng(trial)))
            .collect();
        ThresholdEstimate::new(self.config.side(), thresholds)
    }

    /// Builds the random source for one trial.
    fn trial_rng(&self, trial: usize) -> SimRng {
        match self.config.seed() {
            Some(seed) => SimRng::from_seed(seed.wrapping_add(trial as u64)),
            None => SimRng::from_entropy(),
        }
    }

    /// Runs a single trial to percolation and returns the threshold
    /// fraction.
    fn run_trial(&self, mut rng: SimRng) -> f64 {
        let side = self.config.side();
        let mut grid = Percolation::new(side)
            .expect("config validation guarantees a positive side length");

        while !grid.percolates() {
            let row = rng.gen_uniform_int(1, side);
            let col = rng.gen_uniform_int(1, side);
            // Draws hitting an already-open site are discarded by the
            // idempotent open; only fresh sites advance the count.
            grid.open(row, col)
                .expect("drawn coordinates lie within the grid");
        }

        grid.open_site_count() as f64 / (side * side) as f64
    }
}

/// The recorded outcome of an estimation run.
///
/// Holds the per-trial threshold fractions in trial order. All statistics
/// are derived from that sequence on demand; nothing is cached.
///
/// # Undefined Statistics
///
/// The sample standard deviation divides by `trials − 1` and is therefore
/// undefined for a single trial; [`std_dev`](Self::std_dev) and the
/// confidence bounds return `None` in that case.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdEstimate {
    /// Grid side length the trials ran on.
    side: usize,
    /// One threshold fraction per completed trial, in trial order.
    thresholds: Vec<f64>,
}

impl ThresholdEstimate {
    pub(crate) fn new(side: usize, thresholds: Vec<f64>) -> Self {
        Self { side, thresholds }
    }

    /// Returns the grid side length the trials ran on.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of completed trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the recorded threshold fractions in trial order.
    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds).unwrap_or(f64::NAN)
    }

    /// Returns the sample standard deviation of the recorded thresholds.
    ///
    /// `None` for a single trial, where the Bessel-corrected deviation is
    /// undefined.
    pub fn std_dev(&self) -> Option<f64> {
        stats::sample_std_dev(&self.thresholds)
    }

    /// Returns the low endpoint of the 95% confidence interval on the mean.
    pub fn confidence_lo(&self) -> Option<f64> {
        self.confidence_interval().map(|(lo, _)| lo)
    }

    /// Returns the high endpoint of the 95% confidence interval on the
    /// mean.
    pub fn confidence_hi(&self) -> Option<f64> {
        self.confidence_interval().map(|(_, hi)| hi)
    }

    /// Returns the 95% Gaussian confidence interval `(lo, hi)` on the mean.
    ///
    /// `None` whenever the standard deviation is undefined.
    pub fn confidence_interval(&self) -> Option<(f64, f64)> {
        stats::confidence_interval_95(&self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::EstimatorConfig;

    fn seeded_config(side: usize, trials: usize, seed: u64) -> EstimatorConfig {
        EstimatorConfig::builder()
            .side(side)
            .trials(trials)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_records_one_threshold_per_trial() {
        let estimate = ThresholdEstimator::new(seeded_config(10, 25, 1)).run();
        assert_eq!(estimate.trials(), 25);
        assert_eq!(estimate.side(), 10);
        assert_eq!(estimate.thresholds().len(), 25);
    }

    #[test]
    fn test_thresholds_are_valid_fractions() {
        let estimate = ThresholdEstimator::new(seeded_config(8, 20, 3)).run();
        for &p in estimate.thresholds() {
            assert!(p > 0.0 && p <= 1.0);
        }
    }

    #[test]
    fn test_single_site_grid_always_percolates_on_first_open() {
        let estimate = ThresholdEstimator::new(seeded_config(1, 5, 9)).run();
        for &p in estimate.thresholds() {
            assert_eq!(p, 1.0);
        }
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let a = ThresholdEstimator::new(seeded_config(12, 15, 42)).run();
        let b = ThresholdEstimator::new(seeded_config(12, 15, 42)).run();
        assert_eq!(a.thresholds(), b.thresholds());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = ThresholdEstimator::new(seeded_config(12, 15, 42)).run();
        let b = ThresholdEstimator::new(seeded_config(12, 15, 43)).run();
        assert_ne!(a.thresholds(), b.thresholds());
    }

    #[test]
    fn test_parallel_matches_sequential_for_same_seed() {
        let estimator = ThresholdEstimator::new(seeded_config(10, 16, 7));
        let sequential = estimator.run();
        let parallel = estimator.run_parallel();
        assert_eq!(sequential.thresholds(), parallel.thresholds());
    }

    #[test]
    fn test_statistics_derive_from_thresholds() {
        let estimate = ThresholdEstimate::new(4, vec![0.5, 0.6, 0.7]);
        assert!((estimate.mean() - 0.6).abs() < 1e-12);
        assert!(estimate.std_dev().unwrap() > 0.0);

        let (lo, hi) = estimate.confidence_interval().unwrap();
        assert!(lo <= estimate.mean() && estimate.mean() <= hi);
        assert_eq!(estimate.confidence_lo(), Some(lo));
        assert_eq!(estimate.confidence_hi(), Some(hi));
    }

    #[test]
    fn test_single_trial_statistics_undefined() {
        let estimate = ThresholdEstimate::new(4, vec![0.625]);
        assert_eq!(estimate.mean(), 0.625);
        assert_eq!(estimate.std_dev(), None);
        assert_eq!(estimate.confidence_interval(), None);
    }
}
