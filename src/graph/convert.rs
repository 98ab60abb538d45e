//! Conversion from adjacency matrices to the node/link graph

use crate::graph::builder::GraphBuilder;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::model::Graph;

/// Convert an adjacency matrix into a graph with 1-based node ids.
///
/// Every row becomes a node, isolated vertices included. Each edge `(i, j)`
/// with `i < j` becomes one link `i + 1 -> j + 1`.
pub fn adjacency_matrix_to_graph(matrix: &AdjacencyMatrix) -> Graph {
    let n = matrix.size();
    let mut builder = GraphBuilder::with_capacity(n, matrix.edge_count());

    for i in 0..n {
        builder.get_or_create_node(i + 1);
    }
    for (i, j) in matrix.edges() {
        builder.add_link(i + 1, j + 1);
    }

    let graph = builder.build();
    log::debug!(
        "Converted {}x{} matrix into graph with {} links",
        n,
        n,
        graph.links.len()
    );
    graph
}
