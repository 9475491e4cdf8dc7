use super::mst::Edge;

/// Mutable adjacency multigraph, built once from MST plus matching edges
/// and destructively consumed during circuit extraction. Parallel edges are
/// kept as repeated neighbor entries.
pub(crate) struct Multigraph {
    adjacency: Vec<Vec<usize>>,
}

impl Multigraph {
    pub(crate) fn from_edges(n: usize, edges: &[Edge]) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for edge in edges {
            adjacency[edge.a].push(edge.b);
            adjacency[edge.b].push(edge.a);
        }
        Self { adjacency }
    }

    pub(crate) fn remaining_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn has_unconsumed(&self, vertex: usize) -> bool {
        !self.adjacency[vertex].is_empty()
    }

    /// Removes one occurrence of the edge from both endpoint lists. The
    /// walk must never retain an edge after traversing it.
    fn consume_edge(&mut self, from: usize, to: usize) {
        self.remove_neighbor(from, to);
        self.remove_neighbor(to, from);
    }

    fn remove_neighbor(&mut self, vertex: usize, neighbor: usize) {
        let list = &mut self.adjacency[vertex];
        let Some(pos) = list.iter().position(|&v| v == neighbor) else {
            unreachable!("edge {vertex}-{neighbor} already consumed");
        };
        list.remove(pos);
    }
}

/// Stack-based Hierholzer walk over a multigraph whose every vertex has
/// even degree. Takes ownership of the graph and consumes it edge by edge;
/// the emitted pop order is the circuit.
pub(crate) fn eulerian_circuit(mut graph: Multigraph, start: usize) -> Vec<usize> {
    for (vertex, neighbors) in graph.adjacency.iter().enumerate() {
        assert!(
            neighbors.len() % 2 == 0,
            "vertex {vertex} has odd degree {} entering circuit extraction",
            neighbors.len()
        );
    }

    let edge_count = graph.remaining_edges();
    let mut circuit = Vec::with_capacity(edge_count + 1);
    let mut stack = vec![start];
    let mut current = start;

    while let Some(&resume) = stack.last() {
        if graph.has_unconsumed(current) {
            stack.push(current);
            let next = graph.adjacency[current][0];
            graph.consume_edge(current, next);
            current = next;
        } else {
            circuit.push(current);
            current = resume;
            stack.pop();
        }
    }

    assert_eq!(
        graph.remaining_edges(),
        0,
        "eulerian walk left edges unconsumed"
    );
    assert_eq!(
        circuit.len(),
        edge_count + 1,
        "closed walk must traverse every edge once and revisit its start"
    );
    circuit
}

/// Shortcuts an Eulerian circuit to a Hamiltonian one: keep each vertex at
/// its first occurrence, then close the tour back to its starting vertex.
pub(crate) fn shortcut_to_hamiltonian(circuit: &[usize], n: usize) -> Vec<usize> {
    let mut seen = vec![false; n];
    let mut tour = Vec::with_capacity(n + 1);

    for &vertex in circuit {
        if !seen[vertex] {
            seen[vertex] = true;
            tour.push(vertex);
        }
    }

    if let Some(&start) = tour.first() {
        tour.push(start);
    }
    tour
}
