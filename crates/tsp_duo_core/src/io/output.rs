use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use crate::{DuoSolution, Error, Result, SolverOptions};

/// Writes the two routes in the exchange format: combined cost on the first
/// line, then per salesman a `cost count` header followed by one point
/// index per line, with a blank line between the two blocks.
pub fn write_solution(options: &SolverOptions, solution: &DuoSolution) -> Result<()> {
    match options.output_path() {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::invalid_input(format!(
                    "failed to create output file {}: {e}",
                    path.display()
                ))
            })?;
            write_to(&mut BufWriter::new(file), solution)
        }
        None => write_to(&mut io::stdout().lock(), solution),
    }
}

fn write_to(out: &mut impl Write, solution: &DuoSolution) -> Result<()> {
    writeln!(out, "{}", solution.total_cost())?;

    for (idx, route) in [&solution.first, &solution.second].into_iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} {}", route.cost, route.len())?;
        for &point in &route.order {
            writeln!(out, "{point}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_to;
    use crate::{DuoSolution, Route};

    #[test]
    fn write_to_emits_totals_headers_and_indices() {
        let solution = DuoSolution::new(
            Route::new(vec![0, 2], 4.0),
            Route::new(vec![1, 3], 6.5),
        );

        let mut out = Vec::new();
        write_to(&mut out, &solution).expect("write solution");

        let text = String::from_utf8(out).expect("utf8 output");
        assert_eq!(text, "10.5\n4 2\n0\n2\n\n6.5 2\n1\n3\n");
    }

    #[test]
    fn write_to_handles_single_point_routes() {
        let solution = DuoSolution::new(Route::new(vec![0], 0.0), Route::new(vec![1], 0.0));

        let mut out = Vec::new();
        write_to(&mut out, &solution).expect("write solution");

        let text = String::from_utf8(out).expect("utf8 output");
        assert_eq!(text, "0\n0 1\n0\n\n0 1\n1\n");
    }
}
