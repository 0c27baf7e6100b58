//! Heston calibration pipeline.
//!
//! [`HestonCalibrator`] owns the optimiser and the fit targets;
//! [`CalibrationCache`] persists accepted parameter sets between runs.

pub mod cache;
pub mod calibrator;
pub mod error;

pub use cache::{CacheError, CalibrationCache, PersistedCalibrationRecord, DEFAULT_MODEL_ID};
pub use calibrator::HestonCalibrator;
pub use error::{CalibrationError, CalibrationReport, CalibrationSource};
