use rayon::prelude::*;

use crate::{Error, Node, Result};

/// Distance rounding policy, fixed for a whole run. Mixing rounded and
/// unrounded distances inside one run would make 2-opt deltas inconsistent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DistanceRounding {
    #[default]
    Exact,
    /// Round every distance to the nearest integer, for deployments that
    /// exchange integral costs.
    Nearest,
}

/// Dense symmetric distance matrix over all points: computed once, then
/// shared read-only by every downstream component.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Precomputes all pairwise Euclidean distances. Row population is
    /// independent per point, so rows are filled in parallel.
    pub fn build(points: &[Node], rounding: DistanceRounding) -> Self {
        let n = points.len();
        let values: Vec<f64> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                (0..n).map(move |j| {
                    let raw = points[i].dist(&points[j]);
                    match rounding {
                        DistanceRounding::Exact => raw,
                        DistanceRounding::Nearest => raw.round(),
                    }
                })
            })
            .collect();

        Self { n, values }
    }

    /// Accepts a caller-precomputed row-major matrix. Rejects anything that
    /// is not a valid symmetric non-negative distance table before any
    /// algorithm gets to run on it.
    pub fn from_values(n: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != n * n {
            return Err(Error::invalid_data(format!(
                "distance matrix must hold {}x{} values, got {}",
                n,
                n,
                values.len()
            )));
        }

        let matrix = Self { n, values };
        for i in 0..n {
            if matrix.dist(i, i) != 0.0 {
                return Err(Error::invalid_data(format!(
                    "distance matrix diagonal must be zero at index {i}"
                )));
            }
            for j in (i + 1)..n {
                let forward = matrix.dist(i, j);
                if !forward.is_finite() || forward < 0.0 {
                    return Err(Error::invalid_data(format!(
                        "distance matrix entry ({i},{j}) must be finite and non-negative"
                    )));
                }
                if forward != matrix.dist(j, i) {
                    return Err(Error::invalid_data(format!(
                        "distance matrix must be symmetric, entries ({i},{j}) and ({j},{i}) differ"
                    )));
                }
            }
        }

        Ok(matrix)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn dist(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::{DistanceMatrix, DistanceRounding};
    use crate::Node;

    fn unit_square() -> Vec<Node> {
        vec![
            Node::new(0.0, 0.0),
            Node::new(0.0, 1.0),
            Node::new(1.0, 1.0),
            Node::new(1.0, 0.0),
        ]
    }

    #[test]
    fn build_produces_symmetric_matrix_with_zero_diagonal() {
        let matrix = DistanceMatrix::build(&unit_square(), DistanceRounding::Exact);

        for i in 0..4 {
            assert_eq!(matrix.dist(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(matrix.dist(i, j), matrix.dist(j, i));
            }
        }
        assert!((matrix.dist(0, 2) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn nearest_rounding_yields_integral_distances() {
        let points = vec![Node::new(0.0, 0.0), Node::new(3.0, 3.0)];
        let matrix = DistanceMatrix::build(&points, DistanceRounding::Nearest);

        // sqrt(18) = 4.24.. rounds to 4
        assert_eq!(matrix.dist(0, 1), 4.0);
        assert_eq!(matrix.dist(1, 0), 4.0);
    }

    #[test]
    fn from_values_accepts_a_valid_matrix() {
        let matrix = DistanceMatrix::from_values(2, vec![0.0, 5.0, 5.0, 0.0])
            .expect("valid matrix should be accepted");
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.dist(0, 1), 5.0);
    }

    #[test]
    fn from_values_rejects_wrong_size() {
        let err = DistanceMatrix::from_values(2, vec![0.0, 1.0, 1.0])
            .expect_err("non-square input should fail");
        assert!(err.to_string().contains("must hold 2x2 values"));
    }

    #[test]
    fn from_values_rejects_nonzero_diagonal() {
        let err = DistanceMatrix::from_values(2, vec![1.0, 2.0, 2.0, 0.0])
            .expect_err("nonzero diagonal should fail");
        assert!(err.to_string().contains("diagonal must be zero"));
    }

    #[test]
    fn from_values_rejects_asymmetry() {
        let err = DistanceMatrix::from_values(2, vec![0.0, 2.0, 3.0, 0.0])
            .expect_err("asymmetric input should fail");
        assert!(err.to_string().contains("must be symmetric"));
    }

    #[test]
    fn from_values_rejects_negative_and_non_finite_entries() {
        let err = DistanceMatrix::from_values(2, vec![0.0, -1.0, -1.0, 0.0])
            .expect_err("negative distance should fail");
        assert!(err.to_string().contains("finite and non-negative"));

        let err = DistanceMatrix::from_values(2, vec![0.0, f64::NAN, f64::NAN, 0.0])
            .expect_err("NaN distance should fail");
        assert!(err.to_string().contains("finite and non-negative"));
    }
}
