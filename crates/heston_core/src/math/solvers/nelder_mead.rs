//! Bounded Nelder-Mead simplex minimisation.
//!
//! Derivative-free local search with box constraints enforced by clamping
//! every trial vertex into the feasible region. Suitable for objectives that
//! are expensive or mildly noisy, where gradient-based methods struggle.

use super::bounds::Bounds;
use super::config::SolverConfig;
use crate::types::SolverError;

/// Outcome of a bounded minimisation run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResult {
    /// Best parameter vector found. Always inside the bounds.
    pub solution: Vec<f64>,
    /// Objective value at [`solution`](Self::solution).
    pub objective_value: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the tolerance criterion was met before the iteration cap.
    pub converged: bool,
}

/// A minimiser that honours per-parameter box constraints.
///
/// Implementations must guarantee that the objective is only ever evaluated
/// at points inside `bounds`, and that the returned
/// [`OptimizeResult::solution`] lies inside `bounds`.
///
/// Hitting the iteration cap is not an error: the best point found so far is
/// returned with [`OptimizeResult::converged`] set to `false`, and the caller
/// decides whether to accept it.
pub trait BoundedOptimizer {
    /// Minimises `objective` starting from `initial`, keeping every trial
    /// point inside `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] when the initial point is empty or does not
    /// match the bound dimension, or when the objective is non-finite at the
    /// starting simplex.
    fn minimize<F>(
        &self,
        objective: F,
        initial: Vec<f64>,
        bounds: &Bounds,
        config: &SolverConfig,
    ) -> Result<OptimizeResult, SolverError>
    where
        F: FnMut(&[f64]) -> f64;
}

/// Nelder-Mead downhill simplex search with clamped vertices.
///
/// Standard coefficients: reflection 1.0, expansion 2.0, contraction 0.5,
/// shrink 0.5. The initial simplex perturbs each coordinate by a fraction of
/// its bound interval, so the simplex never starts degenerate even when the
/// initial guess sits on a bound.
#[derive(Debug, Clone, Copy)]
pub struct NelderMeadSolver {
    /// Relative size of the initial simplex as a fraction of each bound
    /// interval width.
    initial_simplex_scale: f64,
}

impl NelderMeadSolver {
    /// Creates a solver with the given initial simplex scale.
    pub fn new(initial_simplex_scale: f64) -> Self {
        Self {
            initial_simplex_scale,
        }
    }

    /// Creates a solver with the default simplex scale of 0.05.
    pub fn with_defaults() -> Self {
        Self::new(0.05)
    }
}

impl Default for NelderMeadSolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

const ALPHA: f64 = 1.0; // reflection
const GAMMA: f64 = 2.0; // expansion
const RHO: f64 = 0.5; // contraction
const SIGMA: f64 = 0.5; // shrink

/// Evaluates the objective, mapping non-finite values to +inf so a single
/// bad evaluation cannot derail the vertex ordering.
fn eval<F: FnMut(&[f64]) -> f64>(objective: &mut F, point: &[f64]) -> f64 {
    let value = objective(point);
    if value.is_finite() {
        value
    } else {
        f64::INFINITY
    }
}

impl BoundedOptimizer for NelderMeadSolver {
    fn minimize<F>(
        &self,
        mut objective: F,
        initial: Vec<f64>,
        bounds: &Bounds,
        config: &SolverConfig,
    ) -> Result<OptimizeResult, SolverError>
    where
        F: FnMut(&[f64]) -> f64,
    {
        if initial.is_empty() {
            return Err(SolverError::EmptyParameterVector);
        }
        bounds.check_dimension(&initial)?;

        let n = initial.len();
        let mut start = initial;
        bounds.clamp_point(&mut start);

        // Initial simplex: the start point plus one perturbed vertex per
        // dimension, each pushed away from the nearer bound.
        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
        simplex.push(start.clone());
        for i in 0..n {
            let (lower, upper) = bounds.interval(i);
            let step = self.initial_simplex_scale * (upper - lower);
            let mut vertex = start.clone();
            vertex[i] = if vertex[i] + step <= upper {
                vertex[i] + step
            } else {
                vertex[i] - step
            };
            bounds.clamp_point(&mut vertex);
            simplex.push(vertex);
        }

        let mut values: Vec<f64> = simplex
            .iter()
            .map(|vertex| eval(&mut objective, vertex))
            .collect();

        if values.iter().all(|v| !v.is_finite()) {
            return Err(SolverError::NumericalInstability(
                "objective non-finite over the entire starting simplex".to_string(),
            ));
        }

        let mut iterations = 0;
        let mut converged = false;

        while iterations < config.max_iterations {
            // Order vertices by objective value, best first.
            let mut order: Vec<usize> = (0..=n).collect();
            order.sort_by(|&a, &b| {
                values[a]
                    .partial_cmp(&values[b])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let reordered_simplex: Vec<Vec<f64>> =
                order.iter().map(|&i| simplex[i].clone()).collect();
            let reordered_values: Vec<f64> = order.iter().map(|&i| values[i]).collect();
            simplex = reordered_simplex;
            values = reordered_values;

            let best = values[0];
            let worst = values[n];
            if worst.is_finite() && (worst - best).abs() < config.tolerance {
                converged = true;
                break;
            }

            iterations += 1;

            // Centroid of all vertices except the worst.
            let mut centroid = vec![0.0; n];
            for vertex in simplex.iter().take(n) {
                for (c, &x) in centroid.iter_mut().zip(vertex) {
                    *c += x;
                }
            }
            for c in &mut centroid {
                *c /= n as f64;
            }

            // Reflection.
            let mut reflected: Vec<f64> = centroid
                .iter()
                .zip(&simplex[n])
                .map(|(&c, &w)| c + ALPHA * (c - w))
                .collect();
            bounds.clamp_point(&mut reflected);
            let f_reflected = eval(&mut objective, &reflected);

            if f_reflected < values[0] {
                // Expansion.
                let mut expanded: Vec<f64> = centroid
                    .iter()
                    .zip(&reflected)
                    .map(|(&c, &r)| c + GAMMA * (r - c))
                    .collect();
                bounds.clamp_point(&mut expanded);
                let f_expanded = eval(&mut objective, &expanded);
                if f_expanded < f_reflected {
                    simplex[n] = expanded;
                    values[n] = f_expanded;
                } else {
                    simplex[n] = reflected;
                    values[n] = f_reflected;
                }
                continue;
            }

            if f_reflected < values[n - 1] {
                simplex[n] = reflected;
                values[n] = f_reflected;
                continue;
            }

            // Contraction, towards the better of worst/reflected.
            let (anchor, f_anchor) = if f_reflected < values[n] {
                (reflected.clone(), f_reflected)
            } else {
                (simplex[n].clone(), values[n])
            };
            let mut contracted: Vec<f64> = centroid
                .iter()
                .zip(&anchor)
                .map(|(&c, &a)| c + RHO * (a - c))
                .collect();
            bounds.clamp_point(&mut contracted);
            let f_contracted = eval(&mut objective, &contracted);

            if f_contracted < f_anchor {
                simplex[n] = contracted;
                values[n] = f_contracted;
                continue;
            }

            // Shrink towards the best vertex.
            let best_vertex = simplex[0].clone();
            for vertex_index in 1..=n {
                for (x, &b) in simplex[vertex_index].iter_mut().zip(&best_vertex) {
                    *x = b + SIGMA * (*x - b);
                }
                bounds.clamp_point(&mut simplex[vertex_index]);
                values[vertex_index] = eval(&mut objective, &simplex[vertex_index]);
            }
        }

        // Best vertex after the final ordering (or loop exit).
        let mut best_index = 0;
        for (index, &value) in values.iter().enumerate() {
            if value < values[best_index] {
                best_index = index;
            }
        }

        Ok(OptimizeResult {
            solution: simplex[best_index].clone(),
            objective_value: values[best_index],
            iterations,
            converged,
        })
    }
}
