//! Calibration target assembly.
//!
//! A calibration target bundles, for one tenor, the three market instruments
//! the calibrator fits against: the ATM-forward call, the 25-delta call and
//! the 25-delta put, each with its strike and Garman-Kohlhagen market price.

use heston_core::types::PricingError;
use thiserror::Error;

use super::quotes::{MarketParams, MarketQuoteSet, QuoteError, Tenor};
use super::skew::{derive_25delta_strikes, derive_skew_vols};
use crate::analytical::{gk_price, OptionType};

/// Error raised while assembling calibration targets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetError {
    /// A required quote was missing.
    #[error(transparent)]
    Quote(#[from] QuoteError),
    /// Strike backout or market pricing failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// One tenor's calibration instruments with their market prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTarget {
    /// Quoted tenor.
    pub tenor: Tenor,
    /// Forward rate at the tenor's expiry.
    pub forward: f64,
    /// 25-delta call strike.
    pub strike_call: f64,
    /// 25-delta put strike.
    pub strike_put: f64,
    /// Market price of the ATM call struck at the forward.
    pub price_atm_mkt: f64,
    /// Market price of the 25-delta call.
    pub price_call_mkt: f64,
    /// Market price of the 25-delta put.
    pub price_put_mkt: f64,
}

/// A single fit instrument: everything a pricer needs to reproduce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLeg {
    /// Strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// Market price to match.
    pub market_price: f64,
}

/// Builds the calibration target for one tenor.
///
/// The ATM instrument is a call struck at the forward `F = S·e^{(rd−rf)T}`
/// priced with the ATM vol; the wings use the skewed vols at their backed-out
/// 25-delta strikes.
///
/// # Errors
///
/// Returns [`TargetError`] when a quote is missing or the skew vols are
/// outside the pricing domain.
pub fn build_calibration_target(
    quotes: &MarketQuoteSet,
    market: &MarketParams,
    tenor: Tenor,
) -> Result<CalibrationTarget, TargetError> {
    let expiry = tenor.years();
    let vols = derive_skew_vols(quotes, tenor)?;

    let (strike_call, strike_put) = derive_25delta_strikes(
        market.spot,
        expiry,
        vols.sigma_25d_call,
        vols.sigma_25d_put,
        market.domestic_rate,
        market.foreign_rate,
    )?;

    let forward = market.forward(expiry);

    let price_atm_mkt = gk_price(
        market.spot,
        forward,
        market.domestic_rate,
        market.foreign_rate,
        vols.sigma_atm,
        expiry,
        OptionType::Call,
    )?;
    let price_call_mkt = gk_price(
        market.spot,
        strike_call,
        market.domestic_rate,
        market.foreign_rate,
        vols.sigma_25d_call,
        expiry,
        OptionType::Call,
    )?;
    let price_put_mkt = gk_price(
        market.spot,
        strike_put,
        market.domestic_rate,
        market.foreign_rate,
        vols.sigma_25d_put,
        expiry,
        OptionType::Put,
    )?;

    Ok(CalibrationTarget {
        tenor,
        forward,
        strike_call,
        strike_put,
        price_atm_mkt,
        price_call_mkt,
        price_put_mkt,
    })
}

/// The full set of calibration targets across quoted tenors.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSet {
    targets: Vec<CalibrationTarget>,
}

impl TargetSet {
    /// Builds targets for every `(tenor, quotes)` pair, in the given order.
    ///
    /// # Errors
    ///
    /// Fails on the first tenor whose quotes are incomplete or unpriceable.
    pub fn build(
        surface: &[(Tenor, MarketQuoteSet)],
        market: &MarketParams,
    ) -> Result<Self, TargetError> {
        let targets = surface
            .iter()
            .map(|(tenor, quotes)| build_calibration_target(quotes, market, *tenor))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { targets })
    }

    /// The per-tenor targets.
    pub fn targets(&self) -> &[CalibrationTarget] {
        &self.targets
    }

    /// Flattens the targets into individual fit instruments, three per tenor
    /// (ATM-forward call, 25-delta call, 25-delta put).
    pub fn legs(&self) -> Vec<TargetLeg> {
        let mut legs = Vec::with_capacity(self.targets.len() * 3);
        for target in &self.targets {
            let expiry = target.tenor.years();
            legs.push(TargetLeg {
                strike: target.forward,
                expiry,
                option_type: OptionType::Call,
                market_price: target.price_atm_mkt,
            });
            legs.push(TargetLeg {
                strike: target.strike_call,
                expiry,
                option_type: OptionType::Call,
                market_price: target.price_call_mkt,
            });
            legs.push(TargetLeg {
                strike: target.strike_put,
                expiry,
                option_type: OptionType::Put,
                market_price: target.price_put_mkt,
            });
        }
        legs
    }

    /// Number of tenors.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True when no tenors were supplied.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixture_market() -> MarketParams {
        MarketParams::new(1.08, 0.035, 0.0215)
    }

    fn fixture_surface() -> Vec<(Tenor, MarketQuoteSet)> {
        vec![
            (Tenor::OneYear, MarketQuoteSet::new(0.08, 0.01, 0.002)),
            (Tenor::FiveYear, MarketQuoteSet::new(0.09, 0.015, 0.003)),
        ]
    }

    #[test]
    fn test_target_prices_positive_and_consistent() {
        let target =
            build_calibration_target(&fixture_surface()[0].1, &fixture_market(), Tenor::OneYear)
                .unwrap();

        assert!(target.price_atm_mkt > 0.0);
        assert!(target.price_call_mkt > 0.0);
        assert!(target.price_put_mkt > 0.0);
        // ATM struck at the forward; the fixed-quantile wings both land
        // above it with the call strike outermost.
        assert!(target.strike_call > target.strike_put);
        assert!(target.strike_put > target.forward);
    }

    #[test]
    fn test_atm_priced_at_forward() {
        let market = fixture_market();
        let target =
            build_calibration_target(&fixture_surface()[0].1, &market, Tenor::OneYear).unwrap();
        let expected = gk_price(
            market.spot,
            market.forward(1.0),
            market.domestic_rate,
            market.foreign_rate,
            0.08,
            1.0,
            OptionType::Call,
        )
        .unwrap();
        assert_relative_eq!(target.price_atm_mkt, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_target_set_yields_six_legs() {
        let set = TargetSet::build(&fixture_surface(), &fixture_market()).unwrap();
        assert_eq!(set.len(), 2);
        let legs = set.legs();
        assert_eq!(legs.len(), 6);
        assert_eq!(legs[0].expiry, 1.0);
        assert_eq!(legs[3].expiry, 5.0);
        assert_eq!(legs[0].option_type, OptionType::Call);
        assert_eq!(legs[2].option_type, OptionType::Put);
        assert!(legs.iter().all(|leg| leg.market_price > 0.0));
    }

    #[test]
    fn test_missing_quote_propagates() {
        let surface = vec![(
            Tenor::OneYear,
            MarketQuoteSet {
                atm_vol_mid: Some(0.08),
                risk_reversal_mid: None,
                butterfly_mid: Some(0.002),
            },
        )];
        let result = TargetSet::build(&surface, &fixture_market());
        assert!(matches!(result, Err(TargetError::Quote(_))));
    }

    #[test]
    fn test_deterministic_rebuild() {
        let first = TargetSet::build(&fixture_surface(), &fixture_market()).unwrap();
        let second = TargetSet::build(&fixture_surface(), &fixture_market()).unwrap();
        assert_eq!(first, second);
    }
}
