use std::time::Instant;

use log::info;

use tsp_duo_core::{
    ConstructionMode, Result, SolverInput, SolverOptions, logging,
    solve_two_salesmen_with_christofides, solve_two_salesmen_with_nearest_neighbor,
    write_solution,
};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    let input = SolverInput::load(&options)?;

    info!("input: {input}");
    info!("options: {options}");

    let solution = match options.construction {
        ConstructionMode::Christofides => {
            solve_two_salesmen_with_christofides(&input, &options)?
        }
        ConstructionMode::NearestNeighbor => {
            solve_two_salesmen_with_nearest_neighbor(&input, &options)?
        }
    };

    write_solution(&options, &solution)?;

    info!(
        "output: first_n={} second_n={} total_cost={:.2} time={:.2}s",
        solution.first.len(),
        solution.second.len(),
        solution.total_cost(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
