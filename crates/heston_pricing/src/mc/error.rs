//! Error types for the Monte Carlo simulation kernel.

use thiserror::Error;

/// Configuration error for the simulation engine.
///
/// Raised during construction when invalid parameters are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside the valid range [1, 10_000_000].
    #[error("invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),
    /// Step count outside the valid range [1, 10_000].
    #[error("invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),
}

/// Runtime error raised by simulation or pricing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Simulation horizon must be strictly positive.
    #[error("invalid simulation horizon {horizon}: must be > 0")]
    InvalidHorizon {
        /// Offending horizon in years.
        horizon: f64,
    },
    /// The horizon and steps-per-year imply an out-of-range step count.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("invalid step count 20000"));
    }

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidHorizon { horizon: -1.0 };
        assert!(err.to_string().contains("-1"));

        let wrapped: SimulationError = ConfigError::InvalidStepCount(20_000).into();
        assert!(wrapped.to_string().contains("step count"));
    }
}
