//! Calibration errors and the calibration report.

use heston_core::types::SolverError;
use heston_models::market::TargetError;
use heston_models::models::{HestonError, HestonParams};
use heston_pricing::mc::SimulationError;
use thiserror::Error;

use super::cache::CacheError;

/// Errors raised by calibration.
///
/// [`NotConverged`](Self::NotConverged) and
/// [`FellerRejected`](Self::FellerRejected) are the two rejection verdicts;
/// both guarantee the engine was left bit-identical to its state before the
/// call.
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// The optimiser hit its iteration cap before meeting the tolerance.
    #[error("calibration did not converge after {iterations} iterations (residual {residual:e})")]
    NotConverged {
        /// Iterations performed.
        iterations: usize,
        /// Best objective value reached.
        residual: f64,
    },
    /// The optimiser converged but the result violates the Feller condition.
    #[error(
        "Feller condition not satisfied: 2*kappa*theta = {feller_lhs:e} < sigma^2 = {sigma_squared:e}"
    )]
    FellerRejected {
        /// 2κθ of the converged candidate.
        feller_lhs: f64,
        /// σ² of the converged candidate.
        sigma_squared: f64,
    },
    /// The optimiser itself failed (bad dimensions, non-finite objective).
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// A candidate or cached vector failed parameter validation.
    #[error(transparent)]
    Model(#[from] HestonError),
    /// Target assembly failed.
    #[error(transparent)]
    Target(#[from] TargetError),
    /// The pricing engine failed during objective evaluation.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// Reading or writing the persisted cache failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// How the reported parameters were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSource {
    /// Freshly fitted by the optimiser and committed.
    Fitted,
    /// Loaded from the persisted cache without fitting.
    CacheHit,
}

/// Outcome of a successful calibration or cache load.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationReport {
    /// The parameters now committed to the engine.
    pub params: HestonParams,
    /// Final sum of squared price errors. `None` for cache hits, which do
    /// not re-price the targets.
    pub residual: Option<f64>,
    /// Optimiser iterations performed (0 for cache hits).
    pub iterations: usize,
    /// Provenance of the committed parameters.
    pub source: CalibrationSource,
}
