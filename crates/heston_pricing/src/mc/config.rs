//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default number of simulation paths.
pub const DEFAULT_N_PATHS: usize = 10_000;

/// Default number of time steps per year (daily on a trading calendar).
pub const DEFAULT_STEPS_PER_YEAR: usize = 252;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying discretisation and seeding.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use heston_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .steps_per_year(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.steps_per_year(), 252);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Time steps per year (the time step is its reciprocal).
    steps_per_year: usize,
    /// Seed applied at the start of every simulate call.
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per year.
    #[inline]
    pub fn steps_per_year(&self) -> usize {
        self.steps_per_year
    }

    /// Returns the RNG seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Time step in years: 1 / steps_per_year.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.steps_per_year as f64
    }
}

impl Default for SimulationConfig {
    /// Default configuration: 10_000 paths, 252 steps per year, seed 42.
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_N_PATHS,
            steps_per_year: DEFAULT_STEPS_PER_YEAR,
            seed: DEFAULT_SEED,
        }
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfigBuilder {
    n_paths: usize,
    steps_per_year: usize,
    seed: u64,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_N_PATHS,
            steps_per_year: DEFAULT_STEPS_PER_YEAR,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the number of time steps per year.
    #[inline]
    pub fn steps_per_year(mut self, steps_per_year: usize) -> Self {
        self.steps_per_year = steps_per_year;
        self
    }

    /// Sets the RNG seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path count is outside
    /// [1, [`MAX_PATHS`]] or steps per year is outside [1, [`MAX_STEPS`]].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.steps_per_year == 0 || self.steps_per_year > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.steps_per_year));
        }
        Ok(SimulationConfig {
            n_paths: self.n_paths,
            steps_per_year: self.steps_per_year,
            seed: self.seed,
        })
    }
}
