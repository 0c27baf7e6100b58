//! # Heston Pricing (L3: Simulation)
//!
//! Monte Carlo simulation and pricing for the Heston FX model.
//!
//! This crate provides:
//! - [`rng::PathRng`]: seeded, reproducible random number generation
//! - [`mc::SimulationConfig`]: validated simulation configuration
//! - [`mc::HestonEngine`]: correlated full-truncation Euler simulation and
//!   discounted Monte Carlo option pricing
//!
//! ## Reproducibility Contract
//!
//! Every `simulate` call reseeds its RNG from the configured seed, so two
//! calls with equal parameters produce bit-identical paths. Calibration
//! relies on this: pricing different candidate parameters against the same
//! random draws (common random numbers) turns the Monte Carlo objective into
//! a deterministic function of the parameters.
//!
//! ## Usage Example
//!
//! ```rust
//! use heston_models::analytical::OptionType;
//! use heston_models::models::HestonParams;
//! use heston_pricing::mc::{HestonEngine, SimulationConfig};
//!
//! let params = HestonParams::new(
//!     1.08,    // spot
//!     0.01,    // v0
//!     0.012,   // theta
//!     1.5,     // kappa
//!     0.15,    // sigma (vol-of-vol)
//!     -0.4,    // rho
//!     0.0135,  // mu = rd - rf
//!     0.035,   // domestic rate
//!     0.0215,  // foreign rate
//! ).unwrap();
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(500)
//!     .build()
//!     .unwrap();
//!
//! let engine = HestonEngine::new(params, config);
//! let price = engine.price_option(1.08, 1.0, OptionType::Call).unwrap();
//! assert!(price > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
