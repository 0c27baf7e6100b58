//! Random number generation for Monte Carlo simulation.

pub mod prng;

pub use prng::PathRng;
