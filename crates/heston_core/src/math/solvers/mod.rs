//! Bounded derivative-free optimisation.
//!
//! The entry point is the [`BoundedOptimizer`] trait: a minimiser that keeps
//! every trial point inside per-parameter box constraints. The crate ships
//! one implementation, [`NelderMeadSolver`], a bounded Nelder-Mead simplex
//! search suited to noisy objectives where derivatives are unavailable.

pub mod bounds;
pub mod config;
pub mod nelder_mead;

pub use bounds::Bounds;
pub use config::SolverConfig;
pub use nelder_mead::{BoundedOptimizer, NelderMeadSolver, OptimizeResult};
