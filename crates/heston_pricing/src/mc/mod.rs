//! Monte Carlo simulation kernel.
//!
//! Layout follows the standard pipeline: [`SimulationConfig`] fixes the
//! discretisation and seed, [`HestonEngine`] evolves correlated spot and
//! variance paths into [`SimulationPaths`], and `price_option` reduces the
//! terminal slice to a discounted expectation.

pub mod config;
pub mod engine;
pub mod error;
pub mod paths;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use engine::HestonEngine;
pub use error::{ConfigError, SimulationError};
pub use paths::{PathMatrix, SimulationPaths};
