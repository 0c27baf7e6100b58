//! # Heston Optimiser (L4: Calibration)
//!
//! Calibrates the Heston Monte Carlo engine to 25-delta vol-surface targets
//! and persists accepted parameter sets.
//!
//! This crate provides:
//! - [`calibration::HestonCalibrator`]: bounded least-squares fit of the
//!   five free Heston parameters to six market option prices, with a Feller
//!   gate and all-or-nothing commit semantics
//! - [`calibration::CalibrationCache`]: a directory-backed JSON store of
//!   calibrated parameters, consulted before fitting unless the caller
//!   forces recalibration
//!
//! ## Commit Semantics
//!
//! The engine's committed parameters change only when the optimiser
//! converges AND the result satisfies the Feller condition 2κθ ≥ σ². Every
//! rejection path leaves the engine bit-identical to its state on entry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calibration;
