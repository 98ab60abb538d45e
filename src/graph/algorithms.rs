//! Connectivity queries over adjacency matrices

use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

use crate::graph::matrix::{AdjacencyMatrix, WeightMatrix};

/// Build a petgraph view of the matrix; node weights are 0-based vertex
/// indices, edge weights come from `weights` or default to 1
pub fn to_petgraph(adjacency: &AdjacencyMatrix, weights: Option<&WeightMatrix>) -> UnGraph<usize, f64> {
    let n = adjacency.size();
    let mut graph = UnGraph::with_capacity(n, adjacency.edge_count());

    for vertex in 0..n {
        graph.add_node(vertex);
    }
    for (i, j) in adjacency.edges() {
        let weight = weights.map_or(1.0, |w| w.weight(i, j));
        graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), weight);
    }

    graph
}

/// Number of connected components; an isolated vertex counts as one
pub fn component_count(adjacency: &AdjacencyMatrix) -> usize {
    algo::connected_components(&to_petgraph(adjacency, None))
}

pub fn is_connected(adjacency: &AdjacencyMatrix) -> bool {
    component_count(adjacency) <= 1
}

/// Vertices reachable from `start`, as a membership mask
pub fn reachable_from(adjacency: &AdjacencyMatrix, start: usize) -> Vec<bool> {
    let n = adjacency.size();
    let mut seen = vec![false; n];
    if start >= n {
        return seen;
    }

    let graph = to_petgraph(adjacency, None);
    let mut bfs = Bfs::new(&graph, NodeIndex::new(start));
    while let Some(node) = bfs.next(&graph) {
        seen[node.index()] = true;
    }
    seen
}

/// Whether the 0-based edge list over `vertex_count` vertices has no cycle
pub fn is_forest(edges: &[(usize, usize)], vertex_count: usize) -> bool {
    let mut graph = UnGraph::<(), ()>::with_capacity(vertex_count, edges.len());
    for _ in 0..vertex_count {
        graph.add_node(());
    }
    for &(a, b) in edges {
        if a >= vertex_count || b >= vertex_count || a == b {
            return false;
        }
        graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }
    !algo::is_cyclic_undirected(&graph)
}
