use crate::{DistanceMatrix, constants::DEPOT};

use super::{euler, matching, mst};

/// Builds one closed tour over all points: minimum spanning tree, greedy
/// matching over its odd-degree vertices, Eulerian circuit extraction, and
/// Hamiltonian shortcutting. The result starts and ends at the depot and
/// visits every other point exactly once.
pub(crate) fn construct_closed_tour(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.len();

    let tree = mst::minimum_spanning_tree(matrix);
    let odd = matching::odd_degree_vertices(n, &tree);
    let pairs = matching::greedy_matching(matrix, &odd);

    log::debug!(
        "christofides: mst_edges={} odd={} matching_edges={}",
        tree.len(),
        odd.len(),
        pairs.len()
    );

    let mut edges = tree;
    edges.extend_from_slice(&pairs);

    let graph = euler::Multigraph::from_edges(n, &edges);
    let circuit = euler::eulerian_circuit(graph, DEPOT);
    let tour = euler::shortcut_to_hamiltonian(&circuit, n);

    log::debug!(
        "christofides: circuit_n={} tour_n={}",
        circuit.len(),
        tour.len()
    );
    tour
}
