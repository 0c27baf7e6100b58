//! Closed-form pricing formulas.
//!
//! Analytical prices serve two roles: they produce the market target prices
//! the calibrator fits against, and they validate the Monte Carlo engine in
//! tests.

pub mod garman_kohlhagen;

pub use garman_kohlhagen::{gk_price, GarmanKohlhagen, GarmanKohlhagenParams, OptionType};
