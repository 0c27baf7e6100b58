//! Configuration for bounded optimisers.

/// Convergence controls shared by all [`BoundedOptimizer`] implementations.
///
/// [`BoundedOptimizer`]: super::BoundedOptimizer
///
/// # Examples
///
/// ```
/// use heston_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_iterations, 200);
///
/// let fast = SolverConfig::fast();
/// assert_eq!(fast.max_iterations, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance on the objective value spread.
    pub tolerance: f64,
    /// Maximum number of iterations before terminating.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    /// Default configuration: tolerance = 1e-10, max iterations = 200.
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with custom tolerance and iteration cap.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Loose configuration for expensive objectives: tolerance = 1e-6,
    /// max iterations = 50.
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 50,
        }
    }
}
