//! Least-squares calibration of the Heston engine to vol-surface targets.
//!
//! # Objective
//!
//! For the six target instruments (per tenor: ATM-forward call, 25-delta
//! call, 25-delta put) the objective is
//!
//! Σ (MC price(candidate) − market price)²
//!
//! priced with common random numbers: every Monte Carlo evaluation reseeds
//! from the same configured seed, so the objective is a deterministic
//! function of the candidate parameters.
//!
//! # Acceptance
//!
//! A fit is committed only when the optimiser converges within its budget
//! AND the converged parameters satisfy the Feller condition 2κθ ≥ σ².
//! Otherwise the engine is left bit-identical and the rejection is returned
//! as an error.

use heston_core::math::solvers::{BoundedOptimizer, Bounds, NelderMeadSolver, SolverConfig};
use heston_models::market::TargetSet;
use heston_models::models::{FreeParamIndex, HestonParams};
use heston_pricing::mc::HestonEngine;
use tracing::{info, warn};

use super::cache::CalibrationCache;
use super::error::{CalibrationError, CalibrationReport, CalibrationSource};

/// Box constraints on `[v0, theta, kappa, sigma, rho]`.
const PARAM_BOUNDS: [(f64, f64); FreeParamIndex::COUNT] = [
    (1e-4, 0.25), // v0
    (1e-4, 0.25), // theta
    (0.1, 5.0),   // kappa
    (0.1, 1.0),   // sigma
    (-0.9, 0.0),  // rho
];

/// Objective tolerance for the fit.
const FIT_TOLERANCE: f64 = 1e-6;

/// Optimiser iteration budget for the fit.
const FIT_MAX_ITERATIONS: usize = 50;

/// Calibrates a [`HestonEngine`] to market targets.
///
/// Generic over the optimiser so tests can substitute deterministic stubs;
/// production use goes through [`HestonCalibrator::with_defaults`], which
/// picks the bounded Nelder-Mead solver.
#[derive(Debug)]
pub struct HestonCalibrator<O: BoundedOptimizer> {
    optimizer: O,
    targets: TargetSet,
    cache: Option<CalibrationCache>,
}

impl HestonCalibrator<NelderMeadSolver> {
    /// Creates a calibrator with the default bounded Nelder-Mead solver.
    pub fn with_defaults(targets: TargetSet) -> Self {
        Self::new(NelderMeadSolver::with_defaults(), targets)
    }
}

impl<O: BoundedOptimizer> HestonCalibrator<O> {
    /// Creates a calibrator from an optimiser and fit targets.
    pub fn new(optimizer: O, targets: TargetSet) -> Self {
        Self {
            optimizer,
            targets,
            cache: None,
        }
    }

    /// Attaches a persistence cache. Committed fits are stored in it, and
    /// [`calibrate_or_load`](Self::calibrate_or_load) consults it first.
    pub fn with_cache(mut self, cache: CalibrationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The fit targets.
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Fits the free parameters and commits them to the engine on success.
    ///
    /// Starts from the engine's current free vector. On commit the result is
    /// also persisted to the attached cache, if any.
    ///
    /// # Errors
    ///
    /// [`CalibrationError::NotConverged`] when the iteration budget runs
    /// out, [`CalibrationError::FellerRejected`] when the converged
    /// parameters violate 2κθ ≥ σ². In both cases the engine is untouched.
    pub fn calibrate(
        &self,
        engine: &mut HestonEngine,
    ) -> Result<CalibrationReport, CalibrationError> {
        let base = *engine.params();
        let legs = self.targets.legs();
        let bounds = Bounds::new(PARAM_BOUNDS.to_vec())?;
        let config = SolverConfig::new(FIT_TOLERANCE, FIT_MAX_ITERATIONS);

        let pricer: &HestonEngine = engine;
        let objective = |free: &[f64]| -> f64 {
            let candidate = match base.with_free_vector(free) {
                Ok(candidate) => candidate,
                Err(_) => return f64::INFINITY,
            };
            let mut total = 0.0;
            for leg in &legs {
                let model_price =
                    match pricer.price_with(&candidate, leg.strike, leg.expiry, leg.option_type) {
                        Ok(price) => price,
                        Err(_) => return f64::INFINITY,
                    };
                let error = model_price - leg.market_price;
                total += error * error;
            }
            total
        };

        let result = self.optimizer.minimize(
            objective,
            base.free_vector().to_vec(),
            &bounds,
            &config,
        )?;

        if !result.converged {
            warn!(
                iterations = result.iterations,
                residual = result.objective_value,
                "calibration did not converge; engine left unchanged"
            );
            return Err(CalibrationError::NotConverged {
                iterations: result.iterations,
                residual: result.objective_value,
            });
        }

        let fitted = base.with_free_vector(&result.solution)?;

        let feller_lhs = 2.0 * fitted.kappa * fitted.theta;
        let sigma_squared = fitted.sigma * fitted.sigma;
        if feller_lhs < sigma_squared {
            warn!(
                feller_lhs,
                sigma_squared, "Feller condition not satisfied; engine left unchanged"
            );
            return Err(CalibrationError::FellerRejected {
                feller_lhs,
                sigma_squared,
            });
        }

        engine.set_params(fitted);
        if let Some(cache) = &self.cache {
            cache.store(fitted.free_vector())?;
        }
        info!(
            iterations = result.iterations,
            residual = result.objective_value,
            v0 = fitted.v0,
            theta = fitted.theta,
            kappa = fitted.kappa,
            sigma = fitted.sigma,
            rho = fitted.rho,
            "calibration committed"
        );

        Ok(CalibrationReport {
            params: fitted,
            residual: Some(result.objective_value),
            iterations: result.iterations,
            source: CalibrationSource::Fitted,
        })
    }

    /// Loads cached parameters when available, otherwise calibrates.
    ///
    /// With `force` set the cache is skipped and a fresh fit runs
    /// regardless. A cached record takes precedence over fitting even when
    /// the market targets have since moved; forcing is the caller's lever
    /// for that.
    ///
    /// # Errors
    ///
    /// Cache decode failures surface as [`CalibrationError::Cache`] or
    /// [`CalibrationError::Model`]; otherwise as [`calibrate`](Self::calibrate).
    pub fn calibrate_or_load(
        &self,
        engine: &mut HestonEngine,
        force: bool,
    ) -> Result<CalibrationReport, CalibrationError> {
        if !force {
            if let Some(cache) = &self.cache {
                if cache.exists() {
                    let record = cache.load()?;
                    let params = engine.params().with_free_vector(&record.free_params)?;
                    engine.set_params(params);
                    info!(model_id = cache.model_id(), "loaded calibration from cache");
                    return Ok(CalibrationReport {
                        params,
                        residual: None,
                        iterations: 0,
                        source: CalibrationSource::CacheHit,
                    });
                }
            }
        }
        self.calibrate(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heston_models::market::{MarketParams, MarketQuoteSet, Tenor};

    #[test]
    fn test_bounds_are_valid() {
        let bounds = Bounds::new(PARAM_BOUNDS.to_vec()).unwrap();
        assert_eq!(bounds.len(), FreeParamIndex::COUNT);
        // Default parameter guesses sit strictly inside
        assert!(bounds.contains(&[0.01, 0.012, 1.5, 0.15, -0.4]));
    }

    #[test]
    fn test_fit_budget_matches_fast_profile() {
        let config = SolverConfig::new(FIT_TOLERANCE, FIT_MAX_ITERATIONS);
        assert_eq!(config, SolverConfig::fast());
    }

    #[test]
    fn test_targets_accessor() {
        let market = MarketParams::new(1.08, 0.035, 0.0215);
        let surface = vec![(Tenor::OneYear, MarketQuoteSet::new(0.08, 0.01, 0.002))];
        let targets = TargetSet::build(&surface, &market).unwrap();
        let calibrator = HestonCalibrator::with_defaults(targets.clone());
        assert_eq!(calibrator.targets(), &targets);
    }
}
