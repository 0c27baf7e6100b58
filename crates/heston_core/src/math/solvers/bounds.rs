//! Box constraints for bounded optimisation.

use crate::types::SolverError;

/// Per-parameter box constraints `lower[i] <= x[i] <= upper[i]`.
///
/// # Examples
///
/// ```
/// use heston_core::math::solvers::Bounds;
///
/// let bounds = Bounds::new(vec![(0.0, 1.0), (-0.9, 0.0)]).unwrap();
/// assert_eq!(bounds.len(), 2);
/// assert_eq!(bounds.clamp_value(0, 1.5), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    intervals: Vec<(f64, f64)>,
}

impl Bounds {
    /// Creates bounds from `(lower, upper)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyParameterVector`] when no intervals are
    /// given, and [`SolverError::InvalidBound`] when any interval has
    /// `lower >= upper` or a non-finite endpoint.
    pub fn new(intervals: Vec<(f64, f64)>) -> Result<Self, SolverError> {
        if intervals.is_empty() {
            return Err(SolverError::EmptyParameterVector);
        }
        for (index, &(lower, upper)) in intervals.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() || lower >= upper {
                return Err(SolverError::InvalidBound {
                    index,
                    lower,
                    upper,
                });
            }
        }
        Ok(Self { intervals })
    }

    /// Number of bounded parameters.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if there are no intervals. Construction forbids this,
    /// so it only exists to satisfy the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The `(lower, upper)` interval for parameter `index`.
    pub fn interval(&self, index: usize) -> (f64, f64) {
        self.intervals[index]
    }

    /// Clamps a single value into the interval for parameter `index`.
    pub fn clamp_value(&self, index: usize, value: f64) -> f64 {
        let (lower, upper) = self.intervals[index];
        value.clamp(lower, upper)
    }

    /// Clamps every component of `point` into its interval, in place.
    pub fn clamp_point(&self, point: &mut [f64]) {
        for (index, value) in point.iter_mut().enumerate() {
            let (lower, upper) = self.intervals[index];
            *value = value.clamp(lower, upper);
        }
    }

    /// Checks that `point` has the same dimension as the bounds.
    pub fn check_dimension(&self, point: &[f64]) -> Result<(), SolverError> {
        if point.len() != self.intervals.len() {
            return Err(SolverError::DimensionMismatch {
                params: point.len(),
                bounds: self.intervals.len(),
            });
        }
        Ok(())
    }

    /// Returns `true` if every component of `point` lies inside its interval.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.intervals.len()
            && point
                .iter()
                .zip(&self.intervals)
                .all(|(&value, &(lower, upper))| value >= lower && value <= upper)
    }
}
