//! Market data and vol-surface analytics.
//!
//! Quote conventions follow the EURUSD OTC market: per-tenor ATM volatility
//! plus 25-delta risk reversal and butterfly, all as decimals.

pub mod quotes;
pub mod skew;
pub mod targets;

pub use quotes::{MarketParams, MarketQuoteSet, QuoteError, Tenor};
pub use skew::{derive_25delta_strikes, derive_skew_vols, SkewVols};
pub use targets::{build_calibration_target, CalibrationTarget, TargetError, TargetSet};
