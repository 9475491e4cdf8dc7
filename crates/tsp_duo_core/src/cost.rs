use crate::DistanceMatrix;

/// Cost of a closed route: consecutive edges plus the return edge from the
/// last entry back to the first. Empty and single-point paths cost 0.
pub fn closed_route_cost(matrix: &DistanceMatrix, path: &[usize]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    open_path_cost(matrix, path) + matrix.dist(path[path.len() - 1], path[0])
}

/// Cost of an open path: consecutive edges only.
pub fn open_path_cost(matrix: &DistanceMatrix, path: &[usize]) -> f64 {
    path.windows(2).map(|pair| matrix.dist(pair[0], pair[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::{closed_route_cost, open_path_cost};
    use crate::{DistanceMatrix, DistanceRounding, Node};

    fn unit_square_matrix() -> DistanceMatrix {
        let points = vec![
            Node::new(0.0, 0.0),
            Node::new(0.0, 1.0),
            Node::new(1.0, 1.0),
            Node::new(1.0, 0.0),
        ];
        DistanceMatrix::build(&points, DistanceRounding::Exact)
    }

    #[test]
    fn closed_route_cost_includes_return_edge() {
        let matrix = unit_square_matrix();
        let cost = closed_route_cost(&matrix, &[0, 1, 2, 3]);
        assert!((cost - 4.0).abs() < 1e-12);
    }

    #[test]
    fn open_path_cost_skips_return_edge() {
        let matrix = unit_square_matrix();
        let cost = open_path_cost(&matrix, &[0, 1, 2, 3]);
        assert!((cost - 3.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_paths_cost_nothing() {
        let matrix = unit_square_matrix();
        assert_eq!(closed_route_cost(&matrix, &[]), 0.0);
        assert_eq!(closed_route_cost(&matrix, &[2]), 0.0);
        assert_eq!(open_path_cost(&matrix, &[]), 0.0);
        assert_eq!(open_path_cost(&matrix, &[2]), 0.0);
    }
}
