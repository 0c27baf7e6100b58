//! Mathematical building blocks.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF/PDF and inverse CDF
//! - `solvers`: Bounded local optimisation

pub mod distributions;
pub mod solvers;
