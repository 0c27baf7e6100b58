//! Quoted vol-surface points and curve-level market parameters.

use thiserror::Error;

/// Quoted tenors on the EURUSD surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tenor {
    /// One year expiry.
    OneYear,
    /// Five year expiry.
    FiveYear,
}

impl Tenor {
    /// Time to expiry in years.
    #[inline]
    pub fn years(self) -> f64 {
        match self {
            Tenor::OneYear => 1.0,
            Tenor::FiveYear => 5.0,
        }
    }

    /// Market label ("1Y", "5Y").
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Tenor::OneYear => "1Y",
            Tenor::FiveYear => "5Y",
        }
    }

    /// All quoted tenors, shortest first.
    pub fn all() -> [Tenor; 2] {
        [Tenor::OneYear, Tenor::FiveYear]
    }
}

impl std::fmt::Display for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error raised when a required quote field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A quote field required by the requested computation was not supplied.
    #[error("missing {field} quote for tenor {tenor}")]
    MissingQuote {
        /// Tenor whose quote set is incomplete.
        tenor: Tenor,
        /// Name of the absent field.
        field: &'static str,
    },
}

/// One tenor's worth of smile quotes, all as decimals (0.08 = 8 vol points).
///
/// Fields are optional because market snapshots routinely arrive with gaps;
/// accessors turn a gap into a [`QuoteError::MissingQuote`] naming tenor and
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketQuoteSet {
    /// At-the-money mid volatility.
    pub atm_vol_mid: Option<f64>,
    /// 25-delta risk reversal mid.
    pub risk_reversal_mid: Option<f64>,
    /// 25-delta butterfly mid.
    pub butterfly_mid: Option<f64>,
}

impl MarketQuoteSet {
    /// Creates a fully populated quote set.
    pub fn new(atm_vol_mid: f64, risk_reversal_mid: f64, butterfly_mid: f64) -> Self {
        Self {
            atm_vol_mid: Some(atm_vol_mid),
            risk_reversal_mid: Some(risk_reversal_mid),
            butterfly_mid: Some(butterfly_mid),
        }
    }

    /// ATM volatility, or an error naming the gap.
    pub fn atm_vol(&self, tenor: Tenor) -> Result<f64, QuoteError> {
        self.atm_vol_mid.ok_or(QuoteError::MissingQuote {
            tenor,
            field: "ATM vol",
        })
    }

    /// 25-delta risk reversal, or an error naming the gap.
    pub fn risk_reversal(&self, tenor: Tenor) -> Result<f64, QuoteError> {
        self.risk_reversal_mid.ok_or(QuoteError::MissingQuote {
            tenor,
            field: "risk reversal",
        })
    }

    /// 25-delta butterfly, or an error naming the gap.
    pub fn butterfly(&self, tenor: Tenor) -> Result<f64, QuoteError> {
        self.butterfly_mid.ok_or(QuoteError::MissingQuote {
            tenor,
            field: "butterfly",
        })
    }
}

/// Curve-level market inputs shared by every tenor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Spot exchange rate (domestic per foreign).
    pub spot: f64,
    /// Domestic risk-free rate (continuous compounding).
    pub domestic_rate: f64,
    /// Foreign risk-free rate (continuous compounding).
    pub foreign_rate: f64,
}

impl MarketParams {
    /// Creates curve-level market parameters.
    pub fn new(spot: f64, domestic_rate: f64, foreign_rate: f64) -> Self {
        Self {
            spot,
            domestic_rate,
            foreign_rate,
        }
    }

    /// Forward rate at `expiry`: F = S * exp((rd - rf) * T).
    #[inline]
    pub fn forward(&self, expiry: f64) -> f64 {
        self.spot * ((self.domestic_rate - self.foreign_rate) * expiry).exp()
    }
}
