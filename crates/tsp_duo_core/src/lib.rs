//! Two-salesmen TSP heuristics over a shared distance matrix.
//! Builds one tour with a Christofides-style pipeline and splits it, or grows
//! two tours at once with dual nearest-neighbor, then refines each with 2-opt.

mod algo;
mod constants;
mod cost;
mod error;
mod io;
pub mod logging;
mod matrix;
mod node;
mod route;
mod solver;

pub use cost::{closed_route_cost, open_path_cost};
pub use error::{Error, Result};
pub use io::input::SolverInput;
pub use io::options::{ConstructionMode, LogFormat, LogLevel, SolverOptions};
pub use io::output::write_solution;
pub use matrix::{DistanceMatrix, DistanceRounding};
pub use node::Node;
pub use route::{DuoSolution, Route, RouteMetrics};
pub use solver::{
    solve_matrix_with_christofides, solve_matrix_with_nearest_neighbor,
    solve_two_salesmen_with_christofides, solve_two_salesmen_with_nearest_neighbor,
};
