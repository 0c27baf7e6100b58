//! Garman-Kohlhagen model for FX option pricing.
//!
//! The standard closed-form model for European FX options. It extends
//! Black-Scholes to two interest rates: the domestic rate discounts the
//! payoff, the foreign rate acts as a continuous yield on the foreign
//! currency.
//!
//! # Mathematical Background
//!
//! With S the spot exchange rate (domestic per foreign), K the strike,
//! rd/rf the domestic/foreign continuously-compounded rates, σ the
//! volatility and T the expiry in years:
//!
//! ## Call Option Price
//! C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
//!
//! ## Put Option Price
//! P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
//!
//! where:
//! d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
//! d2 = d1 - σ * √T
//!
//! # Examples
//!
//! ```
//! use heston_models::analytical::{GarmanKohlhagen, GarmanKohlhagenParams, OptionType};
//!
//! let params = GarmanKohlhagenParams::new(
//!     1.10,   // spot
//!     1.12,   // strike
//!     0.03,   // domestic rate (3%)
//!     0.01,   // foreign rate (1%)
//!     0.15,   // volatility (15%)
//!     1.0,    // expiry (1 year)
//! ).unwrap();
//!
//! let model = GarmanKohlhagen::new(params);
//! let call_price = model.price(OptionType::Call);
//! let put_price = model.price(OptionType::Put);
//!
//! // Put-call parity check
//! let parity_diff = call_price - put_price
//!     - (1.10 * (-0.01_f64).exp() - 1.12 * (-0.03_f64).exp());
//! assert!(parity_diff.abs() < 1e-10);
//! ```

use heston_core::math::distributions::norm_cdf;
use heston_core::types::PricingError;
use num_traits::Float;

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the foreign currency at the strike.
    Call,
    /// Right to sell the foreign currency at the strike.
    Put,
}

impl OptionType {
    /// Intrinsic payoff at terminal spot `s_t`.
    #[inline]
    pub fn payoff<T: Float>(self, s_t: T, strike: T) -> T {
        match self {
            OptionType::Call => (s_t - strike).max(T::zero()),
            OptionType::Put => (strike - s_t).max(T::zero()),
        }
    }
}

/// Parameters for the Garman-Kohlhagen model.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone, Copy)]
pub struct GarmanKohlhagenParams<T: Float> {
    /// Spot exchange rate (domestic per foreign).
    pub spot: T,
    /// Strike price.
    pub strike: T,
    /// Domestic risk-free rate (continuous compounding).
    pub rate_domestic: T,
    /// Foreign risk-free rate (continuous compounding).
    pub rate_foreign: T,
    /// Volatility of the exchange rate.
    pub volatility: T,
    /// Time to expiry in years.
    pub expiry: T,
}

impl<T: Float> GarmanKohlhagenParams<T> {
    /// Creates new Garman-Kohlhagen parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot exchange rate (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate_domestic` - Domestic risk-free rate (can be negative)
    /// * `rate_foreign` - Foreign risk-free rate (can be negative)
    /// * `volatility` - Volatility (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if any parameter is outside its domain.
    pub fn new(
        spot: T,
        strike: T,
        rate_domestic: T,
        rate_foreign: T,
        volatility: T,
        expiry: T,
    ) -> Result<Self, PricingError> {
        if spot <= T::zero() {
            return Err(PricingError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if strike <= T::zero() {
            return Err(PricingError::InvalidSpot {
                spot: strike.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= T::zero() {
            return Err(PricingError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(PricingError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate_domestic,
            rate_foreign,
            volatility,
            expiry,
        })
    }

    /// Returns the forward exchange rate.
    ///
    /// F = S * exp((rd - rf) * T)
    #[inline]
    pub fn forward(&self) -> T {
        let drift = (self.rate_domestic - self.rate_foreign) * self.expiry;
        self.spot * drift.exp()
    }
}

/// Garman-Kohlhagen model for FX option pricing.
///
/// Pre-computes d1, d2 and discount factors at construction so repeated
/// price queries stay cheap.
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen<T: Float> {
    params: GarmanKohlhagenParams<T>,
    /// d1 term from the formula.
    d1: T,
    /// d2 term from the formula.
    d2: T,
    /// e^(-rd * T)
    df_domestic: T,
    /// e^(-rf * T)
    df_foreign: T,
}

impl<T: Float> GarmanKohlhagen<T> {
    /// Creates a new Garman-Kohlhagen model instance.
    pub fn new(params: GarmanKohlhagenParams<T>) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        // d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
        let log_sk = (params.spot / params.strike).ln();
        let drift = params.rate_domestic - params.rate_foreign
            + params.volatility * params.volatility / T::from(2.0).unwrap();
        let d1 = (log_sk + drift * params.expiry) / vol_sqrt_t;

        // d2 = d1 - σ * √T
        let d2 = d1 - vol_sqrt_t;

        let df_domestic = (-params.rate_domestic * params.expiry).exp();
        let df_foreign = (-params.rate_foreign * params.expiry).exp();

        Self {
            params,
            d1,
            d2,
            df_domestic,
            df_foreign,
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &GarmanKohlhagenParams<T> {
        &self.params
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Computes the option price in domestic currency.
    pub fn price(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => {
                // C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
                self.params.spot * self.df_foreign * norm_cdf(self.d1)
                    - self.params.strike * self.df_domestic * norm_cdf(self.d2)
            }
            OptionType::Put => {
                // P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
                self.params.strike * self.df_domestic * norm_cdf(-self.d2)
                    - self.params.spot * self.df_foreign * norm_cdf(-self.d1)
            }
        }
    }

    /// Computes spot delta, e^(-rf*T) * N(±d1).
    pub fn delta(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.df_foreign * norm_cdf(self.d1),
            OptionType::Put => -self.df_foreign * norm_cdf(-self.d1),
        }
    }
}

/// Convenience wrapper: validates inputs and prices in one call.
///
/// # Errors
///
/// Returns [`PricingError`] if any input is outside its domain.
///
/// # Examples
///
/// ```
/// use heston_models::analytical::{gk_price, OptionType};
///
/// let call = gk_price(1.08, 1.08, 0.035, 0.0215, 0.08, 1.0, OptionType::Call).unwrap();
/// assert!(call > 0.0);
/// ```
pub fn gk_price<T: Float>(
    spot: T,
    strike: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
    expiry: T,
    option_type: OptionType,
) -> Result<T, PricingError> {
    let params = GarmanKohlhagenParams::new(
        spot,
        strike,
        rate_domestic,
        rate_foreign,
        volatility,
        expiry,
    )?;
    Ok(GarmanKohlhagen::new(params).price(option_type))
}
