use crate::constants::DEPOT;

/// Splits one closed tour into two near-equal open routes. The depot at
/// tour position 0 opens route 1; even tour positions keep filling route 1
/// until it holds half the entries and everything else lands in route 2.
/// The closing depot duplicate always falls into route 2 and is filtered
/// out. Halves are balanced by count, not spatially coherent; that is a
/// known limitation of this splitting policy.
pub(crate) fn split_closed_tour(tour: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let half = tour.len() / 2;
    let mut first = Vec::with_capacity(half);
    let mut second = Vec::with_capacity(tour.len() - half);

    first.push(tour[0]);
    for (position, &city) in tour.iter().enumerate().skip(1) {
        if position % 2 == 0 && first.len() < half {
            first.push(city);
        } else {
            second.push(city);
        }
    }
    second.retain(|&city| city != DEPOT);

    (first, second)
}
