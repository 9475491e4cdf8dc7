use crate::DistanceMatrix;

// below this length there is no non-adjacent pair to consider
const MIN_PATH_LEN_FOR_2OPT: usize = 4;

/// Pass and swap counts from one optimization run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TwoOptOutcome {
    pub(crate) passes: usize,
    pub(crate) swaps: usize,
}

/// First-improvement 2-opt over one route. The first and last entries stay
/// pinned; every non-adjacent pair (i, j) is scanned in order, a reversal
/// of `path[i+1..=j]` is applied as soon as its delta is negative, and the
/// scan continues from the same outer position on the mutated path. Full
/// passes repeat until one completes without a swap.
pub(crate) fn optimize_route(matrix: &DistanceMatrix, path: &mut [usize]) -> TwoOptOutcome {
    let n = path.len();
    let mut outcome = TwoOptOutcome::default();
    if n < MIN_PATH_LEN_FOR_2OPT {
        return outcome;
    }

    loop {
        outcome.passes += 1;
        let mut pass_swaps = 0usize;

        for i in 1..n - 2 {
            for j in (i + 1)..n - 1 {
                if j - i == 1 {
                    continue;
                }

                let delta = -matrix.dist(path[i], path[i + 1])
                    - matrix.dist(path[j], path[j + 1])
                    + matrix.dist(path[i], path[j])
                    + matrix.dist(path[i + 1], path[j + 1]);

                if delta < 0.0 {
                    path[i + 1..=j].reverse();
                    pass_swaps += 1;
                }
            }
        }

        outcome.swaps += pass_swaps;
        if pass_swaps == 0 {
            break;
        }
    }

    outcome
}
