//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Domain errors from pricing and strike computations
//! - `SolverError`: Errors from the bounded optimisation solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Pricing and strike functions fail fast with these errors instead of
/// silently returning NaN or Inf.
///
/// # Variants
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive spot rate
/// - `NonFinite`: NaN or Infinity detected during computation
///
/// # Examples
/// ```
/// use heston_core::types::PricingError;
///
/// let err = PricingError::InvalidExpiry { expiry: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid time to expiry (must be positive).
    #[error("Invalid time to expiry: T = {expiry} (must be positive)")]
    InvalidExpiry {
        /// The invalid expiry value.
        expiry: f64,
    },

    /// Invalid volatility (must be positive).
    #[error("Invalid volatility: σ = {volatility} (must be positive)")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Invalid spot rate (must be positive).
    #[error("Invalid spot rate: S = {spot} (must be positive)")]
    InvalidSpot {
        /// The invalid spot value.
        spot: f64,
    },

    /// NaN or Infinity detected during computation.
    #[error("Non-finite value detected in {0}")]
    NonFinite(String),
}

/// Errors from the bounded optimisation solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The initial parameter vector was empty.
    #[error("Empty parameter vector")]
    EmptyParameterVector,

    /// Parameter vector and bounds have different lengths.
    #[error("Dimension mismatch: {params} parameters, {bounds} bounds")]
    DimensionMismatch {
        /// Number of parameters supplied.
        params: usize,
        /// Number of bound pairs supplied.
        bounds: usize,
    },

    /// A bound pair is inverted or non-finite.
    #[error("Invalid bound at index {index}: [{lower}, {upper}]")]
    InvalidBound {
        /// Index of the offending bound pair.
        index: usize,
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// Numerical instability during optimisation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
