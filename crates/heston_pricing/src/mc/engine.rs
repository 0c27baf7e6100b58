//! Heston simulation and Monte Carlo pricing engine.
//!
//! # Discretisation
//!
//! Full-truncation Euler on the variance with a log-Euler spot:
//!
//! v_{k+1} = v_k + κ(θ − v_k)·dt + σ·√(max(v_k, ε))·dW₂
//! S_{k+1} = S_k · exp((μ − v_k/2)·dt + √(max(v_k, ε))·dW₁)
//!
//! with ε = 1e-10 applied both under the square root and to the updated
//! variance, and dW₂ = ρ·dW₁ + √(1 − ρ²)·dZ.
//!
//! # Reproducibility
//!
//! `simulate` reseeds its RNG from the configured seed on every call and
//! draws the full dW₁ block before the dZ block. Two calls with equal
//! parameters are therefore bit-identical, and calls with different
//! parameters share their random draws. The calibrator depends on this
//! common-random-numbers property; do not move the reseed or reorder the
//! draws.

use heston_models::analytical::OptionType;
use heston_models::models::HestonParams;

use super::config::{SimulationConfig, MAX_STEPS};
use super::error::{ConfigError, SimulationError};
use super::paths::{PathMatrix, SimulationPaths};
use crate::rng::PathRng;

/// Variance floor applied under the square root and to each update.
const VARIANCE_FLOOR: f64 = 1e-10;

/// Monte Carlo engine holding the committed Heston parameters.
///
/// The parameter set is replaced wholesale via [`set_params`]; candidate
/// parameters explored during calibration are passed to
/// [`price_with`](Self::price_with) without touching the committed value.
///
/// [`set_params`]: Self::set_params
#[derive(Debug, Clone, PartialEq)]
pub struct HestonEngine {
    params: HestonParams,
    config: SimulationConfig,
}

impl HestonEngine {
    /// Creates an engine from validated parameters and configuration.
    pub fn new(params: HestonParams, config: SimulationConfig) -> Self {
        Self { params, config }
    }

    /// The committed parameter set.
    #[inline]
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// The simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the committed parameters wholesale.
    #[inline]
    pub fn set_params(&mut self, params: HestonParams) {
        self.params = params;
    }

    /// Simulates spot and volatility paths out to `horizon` years.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidHorizon`] for a non-positive or
    /// non-finite horizon, and a config error when the horizon implies a
    /// step count outside [1, 10_000].
    pub fn simulate(&self, horizon: f64) -> Result<SimulationPaths, SimulationError> {
        simulate_with(&self.params, &self.config, horizon)
    }

    /// Prices a European option by discounted Monte Carlo expectation.
    ///
    /// Simulates to `horizon`, applies the payoff to the terminal spot slice
    /// and discounts at the domestic rate.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors; see [`simulate`](Self::simulate).
    pub fn price_option(
        &self,
        strike: f64,
        horizon: f64,
        option_type: OptionType,
    ) -> Result<f64, SimulationError> {
        self.price_with(&self.params, strike, horizon, option_type)
    }

    /// Prices with an explicit candidate parameter set, leaving the
    /// committed parameters untouched.
    pub fn price_with(
        &self,
        params: &HestonParams,
        strike: f64,
        horizon: f64,
        option_type: OptionType,
    ) -> Result<f64, SimulationError> {
        let paths = simulate_with(params, &self.config, horizon)?;
        let terminal = paths.spot.terminal();

        let payoff_sum: f64 = terminal
            .iter()
            .map(|&s_t| option_type.payoff(s_t, strike))
            .sum();
        let mean_payoff = payoff_sum / terminal.len() as f64;

        Ok((-params.domestic_rate * horizon).exp() * mean_payoff)
    }
}

/// Evolves one path in place given its pre-drawn standard normal increments.
///
/// `spot_path` and `vol_path` have length `n_steps + 1` with index 0 already
/// holding S0 and √v0. Increments for step k live at `k * n_paths + path`.
#[allow(clippy::too_many_arguments)]
fn evolve_path(
    params: &HestonParams,
    spot_path: &mut [f64],
    vol_path: &mut [f64],
    normals_w1: &[f64],
    normals_z: &[f64],
    path: usize,
    n_paths: usize,
    n_steps: usize,
    dt: f64,
) {
    let sqrt_dt = dt.sqrt();
    let rho = params.rho;
    let rho_comp = (1.0 - rho * rho).sqrt();

    let mut v_prev = params.v0;
    for step in 0..n_steps {
        let idx = step * n_paths + path;
        let dw1 = normals_w1[idx] * sqrt_dt;
        let dw2 = rho * dw1 + rho_comp * normals_z[idx] * sqrt_dt;

        let sqrt_v = v_prev.max(VARIANCE_FLOOR).sqrt();

        let mut v_next = v_prev + params.kappa * (params.theta - v_prev) * dt
            + params.sigma * sqrt_v * dw2;
        v_next = v_next.max(VARIANCE_FLOOR);

        spot_path[step + 1] =
            spot_path[step] * ((params.mu - 0.5 * v_prev) * dt + sqrt_v * dw1).exp();
        vol_path[step + 1] = v_next.sqrt();

        v_prev = v_next;
    }
}

fn simulate_with(
    params: &HestonParams,
    config: &SimulationConfig,
    horizon: f64,
) -> Result<SimulationPaths, SimulationError> {
    if !(horizon > 0.0) || !horizon.is_finite() {
        return Err(SimulationError::InvalidHorizon { horizon });
    }

    let dt = config.dt();
    let n_steps = (horizon / dt).round() as usize;
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(ConfigError::InvalidStepCount(n_steps).into());
    }
    let n_paths = config.n_paths();

    // All randoms come out of one freshly seeded stream, dW1 block first.
    // Draw order is part of the reproducibility contract.
    let mut rng = PathRng::from_seed(config.seed());
    let mut normals_w1 = vec![0.0; n_steps * n_paths];
    let mut normals_z = vec![0.0; n_steps * n_paths];
    rng.fill_normal(&mut normals_w1);
    rng.fill_normal(&mut normals_z);

    let time_grid: Vec<f64> = (0..=n_steps)
        .map(|step| horizon * step as f64 / n_steps as f64)
        .collect();

    let mut spot = PathMatrix::zeros(n_paths, n_steps);
    let mut vol = PathMatrix::zeros(n_paths, n_steps);
    let vol0 = params.vol0();
    for path in 0..n_paths {
        spot.path_mut(path)[0] = params.spot;
        vol.path_mut(path)[0] = vol0;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        spot.par_chunks_mut()
            .zip(vol.par_chunks_mut())
            .enumerate()
            .for_each(|(path, (spot_path, vol_path))| {
                evolve_path(
                    params, spot_path, vol_path, &normals_w1, &normals_z, path, n_paths, n_steps,
                    dt,
                );
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (path, (spot_path, vol_path)) in spot.chunks_mut().zip(vol.chunks_mut()).enumerate() {
            evolve_path(
                params, spot_path, vol_path, &normals_w1, &normals_z, path, n_paths, n_steps, dt,
            );
        }
    }

    Ok(SimulationPaths {
        time_grid,
        spot,
        vol,
    })
}
