//! Error types for the Monte Carlo estimator.

use std::fmt;

/// Configuration error for the threshold estimator.
///
/// These errors occur during construction when invalid parameters are
/// provided; no partial estimator state is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Side length outside the valid range [1, 10_000].
    InvalidSideLength(usize),
    /// Trial count outside the valid range [1, 1_000_000].
    InvalidTrialCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSideLength(side) => {
                write!(
                    f,
                    "Invalid side length {}: must be in range [1, 10_000]",
                    side
                )
            }
            Self::InvalidTrialCount(trials) => {
                write!(
                    f,
                    "Invalid trial count {}: must be in range [1, 1_000_000]",
                    trials
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSideLength(0);
        assert!(err.to_string().contains("Invalid side length 0"));

        let err = ConfigError::InvalidTrialCount(2_000_000);
        assert!(err.to_string().contains("Invalid trial count 2000000"));

        let err = ConfigError::InvalidParameter {
            name: "side",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("side"));
    }
}
