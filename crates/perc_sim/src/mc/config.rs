//! Estimator configuration.
//!
//! This module provides the configuration type and builder for Monte Carlo
//! threshold estimation runs.

use super::error::ConfigError;

/// Maximum grid side length allowed.
pub const MAX_SIDE: usize = 10_000;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: usize = 1_000_000;

/// Monte Carlo estimation configuration.
///
/// Immutable configuration specifying the experiment parameters.
/// Use [`EstimatorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use perc_sim::mc::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .side(200)
///     .trials(100)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.side(), 200);
/// assert_eq!(config.trials(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct EstimatorConfig {
    /// Grid side length n.
    side: usize,
    /// Number of independent trials.
    trials: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the grid side length n.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `side` is 0 or greater than 10,000
    /// - `trials` is 0 or greater than 1,000,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 || self.side > MAX_SIDE {
            return Err(ConfigError::InvalidSideLength(self.side));
        }
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.trials));
        }
        Ok(())
    }
}

/// Builder for [`EstimatorConfig`].
///
/// Provides a fluent API for constructing estimator configurations with
/// validation at build time.
///
/// # Examples
///
/// ```rust
/// use perc_sim::mc::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .side(50)
///     .trials(200)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    side: Option<usize>,
    trials: Option<usize>,
    seed: Option<u64>,
}

impl EstimatorConfigBuilder {
    /// Sets the grid side length.
    ///
    /// # Arguments
    ///
    /// * `side` - Side length in [1, 10_000]
    #[inline]
    pub fn side(mut self, side: usize) -> Self {
        self.side = Some(side);
        self
    }

    /// Sets the number of trials.
    ///
    /// # Arguments
    ///
    /// * `trials` - Trial count in [1, 1_000_000]
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit base seed; trial i derives its own seed from it
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `side` not set or invalid
    /// - `trials` not set or invalid
    pub fn build(self) -> Result<EstimatorConfig, ConfigError> {
        let side = self.side.ok_or(ConfigError::InvalidParameter {
            name: "side",
            value: "must be specified".to_string(),
        })?;

        let trials = self.trials.ok_or(ConfigError::InvalidParameter {
            name: "trials",
            value: "must be specified".to_string(),
        })?;

        let config = EstimatorConfig {
            side,
            trials,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = EstimatorConfig::builder()
            .side(200)
            .trials(100)
            .build()
            .unwrap();

        assert_eq!(config.side(), 200);
        assert_eq!(config.trials(), 100);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = EstimatorConfig::builder()
            .side(50)
            .trials(10)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_invalid_zero_side() {
        let result = EstimatorConfig::builder().side(0).trials(100).build();

        assert!(matches!(result, Err(ConfigError::InvalidSideLength(0))));
    }

    #[test]
    fn test_config_invalid_too_large_side() {
        let result = EstimatorConfig::builder()
            .side(MAX_SIDE + 1)
            .trials(100)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidSideLength(_))));
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let result = EstimatorConfig::builder().side(50).trials(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let result = EstimatorConfig::builder()
            .side(50)
            .trials(MAX_TRIALS + 1)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(_))));
    }

    #[test]
    fn test_config_missing_side() {
        let result = EstimatorConfig::builder().trials(100).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "side", .. })
        ));
    }

    #[test]
    fn test_config_missing_trials() {
        let result = EstimatorConfig::builder().side(50).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "trials", .. })
        ));
    }
}
