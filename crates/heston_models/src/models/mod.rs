//! Stochastic model parameter sets.

pub mod heston;

pub use heston::{FreeParamIndex, HestonError, HestonParams};
