//! Path storage for Monte Carlo simulation.
//!
//! # Memory Layout
//!
//! Paths are stored in a flat path-major buffer:
//! `data[path_idx * (n_steps + 1) + step_idx]`, where `step_idx = 0` holds
//! the initial value. Path-major order keeps each path contiguous, so
//! per-path evolution and terminal reductions stay cache-friendly and the
//! buffer splits cleanly into independent per-path chunks.

/// Flat path-major matrix of simulated values.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    n_paths: usize,
    n_steps: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Allocates a matrix of `n_paths` paths with `n_steps` steps each,
    /// zero-filled. Each path stores `n_steps + 1` values including the
    /// initial one.
    pub fn zeros(n_paths: usize, n_steps: usize) -> Self {
        Self {
            n_paths,
            n_steps,
            data: vec![0.0; n_paths * (n_steps + 1)],
        }
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps (values per path minus one).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Value of `path` at `step`.
    #[inline]
    pub fn get(&self, path: usize, step: usize) -> f64 {
        self.data[path * (self.n_steps + 1) + step]
    }

    /// One full path as a slice, initial value first.
    #[inline]
    pub fn path(&self, path: usize) -> &[f64] {
        let stride = self.n_steps + 1;
        &self.data[path * stride..(path + 1) * stride]
    }

    /// Mutable view of one full path.
    #[inline]
    pub fn path_mut(&mut self, path: usize) -> &mut [f64] {
        let stride = self.n_steps + 1;
        &mut self.data[path * stride..(path + 1) * stride]
    }

    /// Terminal value of every path.
    pub fn terminal(&self) -> Vec<f64> {
        (0..self.n_paths)
            .map(|path| self.get(path, self.n_steps))
            .collect()
    }

    /// The underlying flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable per-path chunks, one slice of `n_steps + 1` values per path.
    #[inline]
    pub fn chunks_mut(&mut self) -> std::slice::ChunksMut<'_, f64> {
        self.data.chunks_mut(self.n_steps + 1)
    }

    /// Mutable per-path chunks as a rayon parallel iterator.
    #[cfg(feature = "parallel")]
    #[inline]
    pub fn par_chunks_mut(&mut self) -> rayon::slice::ChunksMut<'_, f64> {
        use rayon::prelude::*;
        self.data.par_chunks_mut(self.n_steps + 1)
    }
}

/// The output of one simulation run.
///
/// Ephemeral: owned by the caller, dropped after the terminal slice has been
/// reduced. `vol` holds √v (instantaneous volatility), not variance.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationPaths {
    /// Time grid `t_k = k·dt`, length `n_steps + 1`.
    pub time_grid: Vec<f64>,
    /// Simulated spot paths.
    pub spot: PathMatrix,
    /// Simulated volatility (√v) paths.
    pub vol: PathMatrix,
}

impl SimulationPaths {
    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.spot.n_paths()
    }

    /// Number of time steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.spot.n_steps()
    }

    /// Simulation horizon in years (last grid point).
    #[inline]
    pub fn horizon(&self) -> f64 {
        *self.time_grid.last().unwrap_or(&0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_dimensions() {
        let matrix = PathMatrix::zeros(4, 10);
        assert_eq!(matrix.n_paths(), 4);
        assert_eq!(matrix.n_steps(), 10);
        assert_eq!(matrix.as_slice().len(), 4 * 11);
    }

    #[test]
    fn test_path_major_layout() {
        let mut matrix = PathMatrix::zeros(2, 2);
        for (path_idx, chunk) in matrix.chunks_mut().enumerate() {
            for (step_idx, value) in chunk.iter_mut().enumerate() {
                *value = (path_idx * 10 + step_idx) as f64;
            }
        }
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(0, 2), 2.0);
        assert_eq!(matrix.get(1, 1), 11.0);
        assert_eq!(matrix.path(1), &[10.0, 11.0, 12.0]);
        assert_eq!(matrix.terminal(), vec![2.0, 12.0]);
    }

    #[test]
    fn test_path_mut_roundtrip() {
        let mut matrix = PathMatrix::zeros(3, 1);
        matrix.path_mut(2)[1] = 7.5;
        assert_eq!(matrix.get(2, 1), 7.5);
        assert_eq!(matrix.get(2, 0), 0.0);
    }

    proptest::proptest! {
        #[test]
        fn prop_get_agrees_with_path_slice(
            n_paths in 1usize..8,
            n_steps in 0usize..16,
        ) {
            let mut matrix = PathMatrix::zeros(n_paths, n_steps);
            for (path_idx, chunk) in matrix.chunks_mut().enumerate() {
                for (step_idx, value) in chunk.iter_mut().enumerate() {
                    *value = (path_idx * 1000 + step_idx) as f64;
                }
            }
            for path_idx in 0..n_paths {
                let slice = matrix.path(path_idx).to_vec();
                proptest::prop_assert_eq!(slice.len(), n_steps + 1);
                for (step_idx, &value) in slice.iter().enumerate() {
                    proptest::prop_assert_eq!(matrix.get(path_idx, step_idx), value);
                }
            }
            proptest::prop_assert_eq!(matrix.terminal().len(), n_paths);
        }
    }
}
