//! Heston stochastic volatility model parameters.
//!
//! The Heston model describes the spot and its instantaneous variance as a
//! pair of correlated diffusions:
//!
//! dS = μ·S·dt + √v·S·dW₁
//! dv = κ·(θ − v)·dt + σ·√v·dW₂,   d⟨W₁, W₂⟩ = ρ·dt
//!
//! where v₀ is the initial variance, θ the long-run variance, κ the
//! mean-reversion speed, σ the vol-of-vol and ρ the spot/vol correlation
//! (negative in FX and equity markets).
//!
//! The Feller condition 2κθ ≥ σ² keeps the variance process strictly
//! positive in the continuous-time model. It is deliberately not enforced at
//! construction: candidate parameter sets explored during calibration may
//! violate it, and the calibrator gates on it only when committing a result.

use thiserror::Error;

/// Errors raised by Heston parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HestonError {
    /// Spot must be strictly positive.
    #[error("invalid spot: {spot} (must be > 0)")]
    InvalidSpot {
        /// Offending value.
        spot: f64,
    },
    /// Initial variance must be strictly positive.
    #[error("invalid initial variance v0: {v0} (must be > 0)")]
    InvalidV0 {
        /// Offending value.
        v0: f64,
    },
    /// Long-run variance must be strictly positive.
    #[error("invalid long-run variance theta: {theta} (must be > 0)")]
    InvalidTheta {
        /// Offending value.
        theta: f64,
    },
    /// Mean-reversion speed must be strictly positive.
    #[error("invalid mean-reversion speed kappa: {kappa} (must be > 0)")]
    InvalidKappa {
        /// Offending value.
        kappa: f64,
    },
    /// Vol-of-vol must be strictly positive.
    #[error("invalid vol-of-vol sigma: {sigma} (must be > 0)")]
    InvalidSigma {
        /// Offending value.
        sigma: f64,
    },
    /// Correlation must lie in [-1, 0].
    #[error("invalid correlation rho: {rho} (must be in [-1, 0])")]
    InvalidRho {
        /// Offending value.
        rho: f64,
    },
    /// A free vector must carry exactly five components.
    #[error("free parameter vector has length {len}, expected 5")]
    InvalidFreeVector {
        /// Supplied length.
        len: usize,
    },
}

/// Positions of the calibratable parameters inside a free vector.
///
/// The layout `[v0, theta, kappa, sigma, rho]` is shared by
/// [`HestonParams::free_vector`], the calibrator's bounds and the persisted
/// cache records, so it is fixed here once.
#[derive(Debug, Clone, Copy)]
pub struct FreeParamIndex;

impl FreeParamIndex {
    /// Initial variance.
    pub const V0: usize = 0;
    /// Long-run variance.
    pub const THETA: usize = 1;
    /// Mean-reversion speed.
    pub const KAPPA: usize = 2;
    /// Vol-of-vol.
    pub const SIGMA: usize = 3;
    /// Spot/vol correlation.
    pub const RHO: usize = 4;
    /// Number of free parameters.
    pub const COUNT: usize = 5;
}

/// Validated Heston parameter set.
///
/// Immutable once constructed; calibration replaces the whole value rather
/// than mutating fields, so a rejected fit can never leave a half-updated
/// parameter set behind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HestonParams {
    /// Spot exchange rate at t = 0.
    pub spot: f64,
    /// Initial instantaneous variance.
    pub v0: f64,
    /// Long-run variance.
    pub theta: f64,
    /// Mean-reversion speed.
    pub kappa: f64,
    /// Vol-of-vol.
    pub sigma: f64,
    /// Spot/vol correlation.
    pub rho: f64,
    /// Risk-neutral spot drift (rd − rf for FX).
    pub mu: f64,
    /// Domestic risk-free rate, used for payoff discounting.
    pub domestic_rate: f64,
    /// Foreign risk-free rate.
    pub foreign_rate: f64,
}

impl HestonParams {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`HestonError`] when spot, v0, theta, kappa or sigma is not
    /// strictly positive, or rho lies outside [-1, 0].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: f64,
        v0: f64,
        theta: f64,
        kappa: f64,
        sigma: f64,
        rho: f64,
        mu: f64,
        domestic_rate: f64,
        foreign_rate: f64,
    ) -> Result<Self, HestonError> {
        if !(spot > 0.0) {
            return Err(HestonError::InvalidSpot { spot });
        }
        if !(v0 > 0.0) {
            return Err(HestonError::InvalidV0 { v0 });
        }
        if !(theta > 0.0) {
            return Err(HestonError::InvalidTheta { theta });
        }
        if !(kappa > 0.0) {
            return Err(HestonError::InvalidKappa { kappa });
        }
        if !(sigma > 0.0) {
            return Err(HestonError::InvalidSigma { sigma });
        }
        if !(-1.0..=0.0).contains(&rho) {
            return Err(HestonError::InvalidRho { rho });
        }

        Ok(Self {
            spot,
            v0,
            theta,
            kappa,
            sigma,
            rho,
            mu,
            domestic_rate,
            foreign_rate,
        })
    }

    /// Initial volatility, √v0.
    #[inline]
    pub fn vol0(&self) -> f64 {
        self.v0.sqrt()
    }

    /// Long-run volatility, √θ.
    #[inline]
    pub fn long_term_vol(&self) -> f64 {
        self.theta.sqrt()
    }

    /// Whether the Feller condition 2κθ ≥ σ² holds.
    #[inline]
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta >= self.sigma * self.sigma
    }

    /// Feller ratio 2κθ / σ². Values below 1 violate the condition.
    #[inline]
    pub fn feller_ratio(&self) -> f64 {
        2.0 * self.kappa * self.theta / (self.sigma * self.sigma)
    }

    /// The calibratable parameters as `[v0, theta, kappa, sigma, rho]`.
    pub fn free_vector(&self) -> [f64; FreeParamIndex::COUNT] {
        [self.v0, self.theta, self.kappa, self.sigma, self.rho]
    }

    /// A copy of `self` with the free parameters replaced from `free`.
    ///
    /// The market fields (spot, drift, rates) are kept unchanged. The result
    /// is re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`HestonError::InvalidFreeVector`] when `free` does not have
    /// five components, or a validation error when any component is outside
    /// its domain.
    pub fn with_free_vector(&self, free: &[f64]) -> Result<Self, HestonError> {
        if free.len() != FreeParamIndex::COUNT {
            return Err(HestonError::InvalidFreeVector { len: free.len() });
        }
        Self::new(
            self.spot,
            free[FreeParamIndex::V0],
            free[FreeParamIndex::THETA],
            free[FreeParamIndex::KAPPA],
            free[FreeParamIndex::SIGMA],
            free[FreeParamIndex::RHO],
            self.mu,
            self.domestic_rate,
            self.foreign_rate,
        )
    }
}
