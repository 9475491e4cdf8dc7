use crate::DistanceMatrix;

use super::mst::Edge;

/// Points touched by an odd number of edges, ascending.
pub(crate) fn odd_degree_vertices(n: usize, edges: &[Edge]) -> Vec<usize> {
    let mut degree = vec![0usize; n];
    for edge in edges {
        degree[edge.a] += 1;
        degree[edge.b] += 1;
    }

    (0..n).filter(|&vertex| degree[vertex] % 2 == 1).collect()
}

/// Greedy nearest-partner pairing over the odd-degree set: take the first
/// unmatched vertex, pair it with the closest remaining one (first scanned
/// wins distance ties), remove both, repeat. This is an O(k^2) stand-in for
/// the exact minimum-weight matching of textbook Christofides. It forfeits
/// the 3/2 approximation bound but still pairs every odd vertex, which is
/// all the Eulerian stage needs.
pub(crate) fn greedy_matching(matrix: &DistanceMatrix, odd: &[usize]) -> Vec<Edge> {
    // a graph always has an even number of odd-degree vertices
    assert!(
        odd.len() % 2 == 0,
        "odd-degree vertex count must be even, got {}",
        odd.len()
    );

    let mut pool = odd.to_vec();
    let mut matching = Vec::with_capacity(pool.len() / 2);

    while let Some(&vertex) = pool.first() {
        let mut closest = None;
        let mut min_weight = f64::INFINITY;

        for &candidate in &pool[1..] {
            let weight = matrix.dist(vertex, candidate);
            if weight < min_weight {
                min_weight = weight;
                closest = Some(candidate);
            }
        }

        let Some(closest) = closest else {
            unreachable!("odd vertex {vertex} has no partner left in an even-sized pool");
        };

        matching.push(Edge::new(vertex, closest, min_weight));
        pool.retain(|&v| v != vertex && v != closest);
    }

    matching
}

#[cfg(test)]
mod tests {
    use super::{greedy_matching, odd_degree_vertices};
    use crate::{DistanceMatrix, DistanceRounding, Node, algo::mst::Edge};

    #[test]
    fn path_graph_endpoints_have_odd_degree() {
        // 0 - 1 - 2: only the endpoints are odd
        let edges = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
        assert_eq!(odd_degree_vertices(3, &edges), vec![0, 2]);
    }

    #[test]
    fn star_graph_marks_all_leaves_and_center() {
        // center 0 with three leaves: every vertex is odd
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(0, 2, 1.0),
            Edge::new(0, 3, 1.0),
        ];
        assert_eq!(odd_degree_vertices(4, &edges), vec![0, 1, 2, 3]);
    }

    #[test]
    fn odd_vertex_count_is_always_even() {
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 3, 1.0),
            Edge::new(1, 4, 1.0),
        ];
        let odd = odd_degree_vertices(5, &edges);
        assert_eq!(odd.len() % 2, 0);
    }

    #[test]
    fn greedy_matching_pairs_every_vertex_exactly_once() {
        let points = vec![
            Node::new(0.0, 0.0),
            Node::new(10.0, 0.0),
            Node::new(0.5, 0.0),
            Node::new(10.5, 0.0),
        ];
        let matrix = DistanceMatrix::build(&points, DistanceRounding::Exact);

        let matching = greedy_matching(&matrix, &[0, 1, 2, 3]);

        assert_eq!(matching.len(), 2);
        let mut matched: Vec<usize> = matching
            .iter()
            .flat_map(|edge| [edge.a, edge.b])
            .collect();
        matched.sort_unstable();
        assert_eq!(matched, vec![0, 1, 2, 3]);
    }

    #[test]
    fn greedy_matching_picks_the_nearest_partner_first() {
        let points = vec![
            Node::new(0.0, 0.0),
            Node::new(10.0, 0.0),
            Node::new(0.5, 0.0),
            Node::new(10.5, 0.0),
        ];
        let matrix = DistanceMatrix::build(&points, DistanceRounding::Exact);

        let matching = greedy_matching(&matrix, &[0, 1, 2, 3]);

        // vertex 0 pairs with nearby 2, leaving 1 with 3
        assert_eq!((matching[0].a, matching[0].b), (0, 2));
        assert_eq!((matching[1].a, matching[1].b), (1, 3));
    }

    #[test]
    fn greedy_matching_of_empty_set_is_empty() {
        let matrix = DistanceMatrix::build(&[Node::new(0.0, 0.0)], DistanceRounding::Exact);
        assert!(greedy_matching(&matrix, &[]).is_empty());
    }
}
