//! Persisted calibration parameter cache.
//!
//! A directory-backed JSON store. Each model identity owns one record file
//! (`<model_id>.json`) holding the five free Heston parameters. Records
//! never expire; staleness is the caller's concern via the force-recalibrate
//! flag on [`HestonCalibrator::calibrate_or_load`].
//!
//! [`HestonCalibrator::calibrate_or_load`]: super::calibrator::HestonCalibrator::calibrate_or_load

use std::fs;
use std::path::PathBuf;

use heston_models::models::FreeParamIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default model identity for the EURUSD Heston setup.
pub const DEFAULT_MODEL_ID: &str = "heston-eurusd";

/// Errors raised by the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem access failed.
    #[error("cache I/O failure: {0}")]
    Io(#[from] std::io::Error),
    /// A record file exists but does not decode.
    #[error("cache record corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// A record decoded but carries a different model identity.
    #[error("cache record is for model '{found}', expected '{expected}'")]
    ModelIdMismatch {
        /// Identity this cache was opened with.
        expected: String,
        /// Identity found inside the record.
        found: String,
    },
}

/// On-disk calibration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedCalibrationRecord {
    /// Model identity the parameters belong to.
    pub model_id: String,
    /// Free parameters `[v0, theta, kappa, sigma, rho]`.
    pub free_params: [f64; FreeParamIndex::COUNT],
}

/// Directory-backed JSON store of calibrated parameters.
///
/// # Examples
///
/// ```no_run
/// use heston_optimiser::calibration::CalibrationCache;
///
/// let cache = CalibrationCache::new("var/calibration");
/// if cache.exists() {
///     let record = cache.load().unwrap();
///     println!("cached v0 = {}", record.free_params[0]);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CalibrationCache {
    directory: PathBuf,
    model_id: String,
}

impl CalibrationCache {
    /// Creates a cache rooted at `directory` with the default model
    /// identity.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_model_id(directory, DEFAULT_MODEL_ID)
    }

    /// Creates a cache with an explicit model identity.
    pub fn with_model_id(directory: impl Into<PathBuf>, model_id: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            model_id: model_id.into(),
        }
    }

    /// The model identity records are keyed by.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Path of the record file for this model identity.
    pub fn record_path(&self) -> PathBuf {
        self.directory.join(format!("{}.json", self.model_id))
    }

    /// Whether a record exists for this model identity.
    pub fn exists(&self) -> bool {
        self.record_path().is_file()
    }

    /// Loads and validates the record.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the file is unreadable, does not decode,
    /// or belongs to a different model identity.
    pub fn load(&self) -> Result<PersistedCalibrationRecord, CacheError> {
        let path = self.record_path();
        let contents = fs::read_to_string(&path)?;
        let record: PersistedCalibrationRecord = serde_json::from_str(&contents)?;
        if record.model_id != self.model_id {
            return Err(CacheError::ModelIdMismatch {
                expected: self.model_id.clone(),
                found: record.model_id,
            });
        }
        debug!(path = %path.display(), "loaded calibration record");
        Ok(record)
    }

    /// Writes a record for this model identity, creating the directory if
    /// needed and replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] on filesystem failure.
    pub fn store(&self, free_params: [f64; FreeParamIndex::COUNT]) -> Result<(), CacheError> {
        let record = PersistedCalibrationRecord {
            model_id: self.model_id.clone(),
            free_params,
        };
        fs::create_dir_all(&self.directory)?;
        let path = self.record_path();
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), "stored calibration record");
        Ok(())
    }

    /// Deletes the record for this model identity, if present.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] on filesystem failure other than the file
    /// being absent.
    pub fn invalidate(&self) -> Result<(), CacheError> {
        match fs::remove_file(self.record_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FREE: [f64; 5] = [0.01, 0.012, 1.5, 0.15, -0.4];

    #[test]
    fn test_store_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let cache = CalibrationCache::new(dir.path());
        assert!(!cache.exists());

        cache.store(FREE).unwrap();
        assert!(cache.exists());

        let record = cache.load().unwrap();
        assert_eq!(record.model_id, DEFAULT_MODEL_ID);
        assert_eq!(record.free_params, FREE);
    }

    #[test]
    fn test_store_replaces_previous_record() {
        let dir = TempDir::new().unwrap();
        let cache = CalibrationCache::new(dir.path());
        cache.store(FREE).unwrap();
        let updated = [0.02, 0.02, 2.0, 0.2, -0.5];
        cache.store(updated).unwrap();
        assert_eq!(cache.load().unwrap().free_params, updated);
    }

    #[test]
    fn test_model_id_mismatch_rejected() {
        let dir = TempDir::new().unwrap();
        let writer = CalibrationCache::with_model_id(dir.path(), "heston-eurusd");
        writer.store(FREE).unwrap();

        // Same file name, different expected identity
        let record_path = writer.record_path();
        let other = CalibrationCache::with_model_id(dir.path(), "heston-usdjpy");
        fs::rename(&record_path, other.record_path()).unwrap();
        assert!(matches!(
            other.load(),
            Err(CacheError::ModelIdMismatch { .. })
        ));
    }

    #[test]
    fn test_corrupt_record_rejected() {
        let dir = TempDir::new().unwrap();
        let cache = CalibrationCache::new(dir.path());
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(cache.record_path(), "not json").unwrap();
        assert!(matches!(cache.load(), Err(CacheError::Corrupt(_))));
    }

    #[test]
    fn test_invalidate_idempotent() {
        let dir = TempDir::new().unwrap();
        let cache = CalibrationCache::new(dir.path());
        cache.store(FREE).unwrap();
        cache.invalidate().unwrap();
        assert!(!cache.exists());
        // Second invalidate on an absent record is fine
        cache.invalidate().unwrap();
    }

    #[test]
    fn test_missing_record_is_io_error() {
        let dir = TempDir::new().unwrap();
        let cache = CalibrationCache::new(dir.path());
        assert!(matches!(cache.load(), Err(CacheError::Io(_))));
    }

    proptest::proptest! {
        // JSON round trip must not perturb any representable parameter set.
        #[test]
        fn prop_record_round_trip_is_lossless(
            v0 in 1e-4f64..0.25,
            theta in 1e-4f64..0.25,
            kappa in 0.1f64..5.0,
            sigma in 0.1f64..1.0,
            rho in -0.9f64..0.0,
        ) {
            let dir = TempDir::new().unwrap();
            let cache = CalibrationCache::new(dir.path());
            let free = [v0, theta, kappa, sigma, rho];
            cache.store(free).unwrap();
            proptest::prop_assert_eq!(cache.load().unwrap().free_params, free);
        }
    }
}
