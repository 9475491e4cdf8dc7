use crate::DistanceMatrix;

/// Grows two routes at once from two distinct start points over a shared
/// visited set. Each round both salesmen look up their nearest unvisited
/// point and exactly one advances: the one with the smaller distance,
/// salesman 1 on ties. Once every point is claimed, each route closes by
/// returning to its own start.
pub(crate) fn construct_dual_routes(
    matrix: &DistanceMatrix,
    start_a: usize,
    start_b: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut route_a = Vec::with_capacity(n + 1);
    let mut route_b = Vec::with_capacity(n + 1);

    visited[start_a] = true;
    visited[start_b] = true;
    route_a.push(start_a);
    route_b.push(start_b);

    let mut current_a = start_a;
    let mut current_b = start_b;

    while route_a.len() + route_b.len() < n {
        let next_a = nearest_unvisited(matrix, &visited, current_a);
        let next_b = nearest_unvisited(matrix, &visited, current_b);

        match (next_a, next_b) {
            (Some((city, _)), None) => {
                visited[city] = true;
                route_a.push(city);
                current_a = city;
            }
            (None, Some((city, _))) => {
                visited[city] = true;
                route_b.push(city);
                current_b = city;
            }
            (Some((city_a, dist_a)), Some((city_b, dist_b))) => {
                if dist_a <= dist_b {
                    visited[city_a] = true;
                    route_a.push(city_a);
                    current_a = city_a;
                } else {
                    visited[city_b] = true;
                    route_b.push(city_b);
                    current_b = city_b;
                }
            }
            (None, None) => {
                unreachable!("no unvisited point left while routes are incomplete")
            }
        }
    }

    route_a.push(start_a);
    route_b.push(start_b);

    log::debug!(
        "dual_nn: complete first_n={} second_n={}",
        route_a.len(),
        route_b.len()
    );
    (route_a, route_b)
}

/// Nearest unvisited point by matrix scan; the lowest index wins ties.
fn nearest_unvisited(
    matrix: &DistanceMatrix,
    visited: &[bool],
    from: usize,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for city in 0..matrix.len() {
        if visited[city] {
            continue;
        }
        let dist = matrix.dist(from, city);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((city, dist)),
        }
    }

    best
}
