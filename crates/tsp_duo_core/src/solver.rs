use std::time::Instant;

use crate::{
    DistanceMatrix, DistanceRounding, DuoSolution, Error, Result, Route, SolverInput,
    SolverOptions,
    algo::{christofides, dual_nn, split, two_opt},
    constants::MIN_SPLIT_POINTS,
    cost,
};

/// Christofides-style construction, balanced split, then 2-opt per route.
#[tsp_duo_derive::timer("solver")]
pub fn solve_two_salesmen_with_christofides(
    input: &SolverInput,
    options: &SolverOptions,
) -> Result<DuoSolution> {
    validate_points(input)?;
    solve_matrix_with_christofides(&build_matrix(input, options), options)
}

/// Dual nearest-neighbor construction, then 2-opt per route.
#[tsp_duo_derive::timer("solver")]
pub fn solve_two_salesmen_with_nearest_neighbor(
    input: &SolverInput,
    options: &SolverOptions,
) -> Result<DuoSolution> {
    validate_points(input)?;
    solve_matrix_with_nearest_neighbor(&build_matrix(input, options), options)
}

/// Christofides pipeline over a caller-supplied distance matrix.
pub fn solve_matrix_with_christofides(
    matrix: &DistanceMatrix,
    options: &SolverOptions,
) -> Result<DuoSolution> {
    validate_point_count(matrix)?;

    let tour = christofides::construct_closed_tour(matrix);
    let (first_order, second_order) = split::split_closed_tour(&tour);
    log::info!(
        "split: tour_n={} first_n={} second_n={}",
        tour.len(),
        first_order.len(),
        second_order.len()
    );

    let first = refine_route(matrix, first_order, "first");
    let second = refine_route(matrix, second_order, "second");

    Ok(score_routes(matrix, options, first, second))
}

/// Nearest-neighbor pipeline over a caller-supplied distance matrix.
pub fn solve_matrix_with_nearest_neighbor(
    matrix: &DistanceMatrix,
    options: &SolverOptions,
) -> Result<DuoSolution> {
    validate_point_count(matrix)?;
    validate_start_indices(matrix, options)?;

    let (first_closed, second_closed) =
        dual_nn::construct_dual_routes(matrix, options.start_a, options.start_b);

    // the constructor closes each route with its own start; optimize in
    // that closed shape, then drop the duplicate so both constructions
    // hand the same open shape to scoring
    let mut first_order = refine_route(matrix, first_closed, "first");
    let mut second_order = refine_route(matrix, second_closed, "second");
    first_order.pop();
    second_order.pop();

    Ok(score_routes(matrix, options, first_order, second_order))
}

fn build_matrix(input: &SolverInput, options: &SolverOptions) -> DistanceMatrix {
    let rounding = if options.round_distances {
        DistanceRounding::Nearest
    } else {
        DistanceRounding::Exact
    };

    let now = Instant::now();
    let matrix = DistanceMatrix::build(input.points(), rounding);
    log::debug!(
        "matrix: built n={} rounding={rounding:?} secs={:.2}",
        matrix.len(),
        now.elapsed().as_secs_f32()
    );
    matrix
}

fn refine_route(matrix: &DistanceMatrix, mut order: Vec<usize>, label: &str) -> Vec<usize> {
    let outcome = two_opt::optimize_route(matrix, &mut order);
    log::info!(
        "two_opt.{label}: complete n={} passes={} swaps={}",
        order.len(),
        outcome.passes,
        outcome.swaps
    );
    order
}

fn score_routes(
    matrix: &DistanceMatrix,
    options: &SolverOptions,
    first_order: Vec<usize>,
    second_order: Vec<usize>,
) -> DuoSolution {
    let first_cost = cost::closed_route_cost(matrix, &first_order);
    let second_cost = cost::closed_route_cost(matrix, &second_order);
    let solution = DuoSolution::new(
        Route::new(first_order, first_cost),
        Route::new(second_order, second_cost),
    );

    solution.first.metrics(matrix, options.outlier_threshold);
    solution.second.metrics(matrix, options.outlier_threshold);
    log::info!(
        "solver: complete first_cost={:.2} second_cost={:.2} total_cost={:.2}",
        solution.first.cost,
        solution.second.cost,
        solution.total_cost()
    );

    solution
}

fn validate_point_count(matrix: &DistanceMatrix) -> Result<()> {
    if matrix.len() < MIN_SPLIT_POINTS {
        return Err(Error::invalid_input(format!(
            "Need at least {MIN_SPLIT_POINTS} points to split between two salesmen"
        )));
    }
    Ok(())
}

fn validate_points(input: &SolverInput) -> Result<()> {
    if input.points_len() < MIN_SPLIT_POINTS {
        return Err(Error::invalid_input(format!(
            "Need at least {MIN_SPLIT_POINTS} points to split between two salesmen"
        )));
    }
    if input.points().iter().any(|point| !point.is_valid()) {
        return Err(Error::invalid_input(
            "Input contains non-finite coordinates",
        ));
    }
    Ok(())
}

fn validate_start_indices(matrix: &DistanceMatrix, options: &SolverOptions) -> Result<()> {
    let n = matrix.len();
    if options.start_a >= n || options.start_b >= n {
        return Err(Error::invalid_input(format!(
            "Start indices must be below the point count {n}"
        )));
    }
    if options.start_a == options.start_b {
        return Err(Error::invalid_input(
            "Start indices must name two distinct points",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        solve_matrix_with_christofides, solve_two_salesmen_with_christofides,
        solve_two_salesmen_with_nearest_neighbor,
    };
    use crate::{DistanceMatrix, Node, SolverInput, SolverOptions};

    fn unit_square_input() -> SolverInput {
        SolverInput::new(&[
            Node::new(0.0, 0.0),
            Node::new(0.0, 1.0),
            Node::new(1.0, 1.0),
            Node::new(1.0, 0.0),
        ])
    }

    #[test]
    fn christofides_covers_all_points_across_two_routes() {
        let solution =
            solve_two_salesmen_with_christofides(&unit_square_input(), &SolverOptions::default())
                .expect("solve square");

        let mut covered: Vec<usize> = solution
            .first
            .order
            .iter()
            .chain(&solution.second.order)
            .copied()
            .collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![0, 1, 2, 3]);
        assert_eq!(solution.first.order[0], 0);
        assert!(!solution.second.order.contains(&0));
    }

    #[test]
    fn christofides_two_point_run_parks_each_salesman() {
        let input = SolverInput::new(&[Node::new(0.0, 0.0), Node::new(5.0, 0.0)]);
        let solution = solve_two_salesmen_with_christofides(&input, &SolverOptions::default())
            .expect("solve pair");

        assert_eq!(solution.first.order, vec![0]);
        assert_eq!(solution.second.order, vec![1]);
        assert_eq!(solution.total_cost(), 0.0);
    }

    #[test]
    fn nearest_neighbor_two_point_run_parks_each_salesman() {
        let input = SolverInput::new(&[Node::new(0.0, 0.0), Node::new(0.0, 0.0)]);
        let solution = solve_two_salesmen_with_nearest_neighbor(&input, &SolverOptions::default())
            .expect("solve pair");

        assert_eq!(solution.first.order, vec![0]);
        assert_eq!(solution.second.order, vec![1]);
        assert_eq!(solution.total_cost(), 0.0);
    }

    #[test]
    fn nearest_neighbor_splits_two_clusters() {
        let input = SolverInput::new(&[
            Node::new(0.0, 0.0),
            Node::new(100.0, 0.0),
            Node::new(1.0, 0.0),
            Node::new(101.0, 0.0),
            Node::new(2.0, 0.0),
            Node::new(102.0, 0.0),
        ]);
        let solution = solve_two_salesmen_with_nearest_neighbor(&input, &SolverOptions::default())
            .expect("solve clusters");

        let mut first = solution.first.order.clone();
        first.sort_unstable();
        assert_eq!(first, vec![0, 2, 4]);

        let mut second = solution.second.order.clone();
        second.sort_unstable();
        assert_eq!(second, vec![1, 3, 5]);
    }

    #[test]
    fn single_point_input_is_rejected() {
        let input = SolverInput::new(&[Node::new(0.0, 0.0)]);
        let err = solve_two_salesmen_with_christofides(&input, &SolverOptions::default())
            .expect_err("one point cannot be split");
        assert!(err.to_string().contains("at least 2 points"));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let input = SolverInput::new(&[Node::new(0.0, 0.0), Node::new(f64::NAN, 1.0)]);
        let err = solve_two_salesmen_with_christofides(&input, &SolverOptions::default())
            .expect_err("NaN coordinate should fail");
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn equal_start_indices_are_rejected() {
        let options = SolverOptions {
            start_b: 0,
            ..SolverOptions::default()
        };
        let err = solve_two_salesmen_with_nearest_neighbor(&unit_square_input(), &options)
            .expect_err("equal starts should fail");
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn out_of_range_start_index_is_rejected() {
        let options = SolverOptions {
            start_b: 9,
            ..SolverOptions::default()
        };
        let err = solve_two_salesmen_with_nearest_neighbor(&unit_square_input(), &options)
            .expect_err("out-of-range start should fail");
        assert!(err.to_string().contains("below the point count"));
    }

    #[test]
    fn precomputed_matrix_runs_the_same_pipeline() {
        // equilateral-ish triangle as a raw matrix
        let matrix = DistanceMatrix::from_values(
            3,
            vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        )
        .expect("valid matrix");

        let solution = solve_matrix_with_christofides(&matrix, &SolverOptions::default())
            .expect("solve triangle");

        let mut covered: Vec<usize> = solution
            .first
            .order
            .iter()
            .chain(&solution.second.order)
            .copied()
            .collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![0, 1, 2]);
    }

    #[test]
    fn two_opt_keeps_the_square_split_cost() {
        // each split route of the square is two points; nothing to improve
        let solution =
            solve_two_salesmen_with_christofides(&unit_square_input(), &SolverOptions::default())
                .expect("solve square");

        let diagonal = 2.0_f64.sqrt();
        assert!((solution.total_cost() - 4.0 * diagonal).abs() < 1e-9);
    }
}
