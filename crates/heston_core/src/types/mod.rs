//! Core type definitions.
//!
//! This module provides:
//! - `error`: Structured error types shared across the engine layers

pub mod error;

pub use error::{PricingError, SolverError};
