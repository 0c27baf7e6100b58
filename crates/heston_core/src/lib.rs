//! # heston_core: Mathematical Foundation for the FX Stochastic Volatility Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! heston_core serves as the bottom layer of the 4-layer architecture, providing:
//! - Normal distribution functions: CDF, PDF, inverse CDF (`math::distributions`)
//! - Bounded local optimisation: `BoundedOptimizer`, `NelderMeadSolver` (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other heston_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use heston_core::math::distributions::norm_cdf;
//! use heston_core::math::solvers::{Bounds, NelderMeadSolver, SolverConfig, BoundedOptimizer};
//!
//! // Standard normal CDF
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//!
//! // Bounded minimisation of (x - 2)^2
//! let solver = NelderMeadSolver::with_defaults();
//! let bounds = Bounds::new(vec![(0.0, 5.0)]).unwrap();
//! let result = solver
//!     .minimize(|p| (p[0] - 2.0).powi(2), vec![0.5], &bounds, &SolverConfig::default())
//!     .unwrap();
//! assert!((result.solution[0] - 2.0).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
