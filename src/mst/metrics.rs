//! Spanning tree statistics

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::algorithms;
use crate::graph::matrix::{AdjacencyMatrix, WeightMatrix};
use crate::mst::MstEdge;

/// Summary of a computed tree against the graph it was computed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstSummary {
    /// Vertices in the graph
    pub vertex_count: usize,

    /// Edges in the tree
    pub edge_count: usize,

    /// Sum of edge weights (unit weights when no weight matrix is given)
    pub total_weight: f64,

    /// Whether the tree reaches every vertex
    pub spanning: bool,

    /// Connected components of the source graph
    pub components: usize,
}

/// Total weight of `edges`
pub fn total_weight(edges: &[MstEdge], weights: Option<&WeightMatrix>) -> f64 {
    match weights {
        Some(w) => edges.iter().map(|&(a, b)| w.weight(a, b)).sum(),
        None => edges.len() as f64,
    }
}

/// Tree edges exist in the graph and form no cycle
pub fn is_valid_tree(edges: &[MstEdge], adjacency: &AdjacencyMatrix) -> bool {
    let n = adjacency.size();
    edges
        .iter()
        .all(|&(a, b)| a < n && b < n && adjacency.has_edge(a, b))
        && algorithms::is_forest(edges, n)
}

/// Calculate summary metrics for a tree
pub fn summarize(
    edges: &[MstEdge],
    adjacency: &AdjacencyMatrix,
    weights: Option<&WeightMatrix>,
) -> Result<MstSummary> {
    if let Some(w) = weights {
        w.ensure_matches(adjacency)?;
    }
    let vertex_count = adjacency.size();

    Ok(MstSummary {
        vertex_count,
        edge_count: edges.len(),
        total_weight: total_weight(edges, weights),
        // An acyclic edge set with n - 1 edges over n vertices is a spanning tree
        spanning: vertex_count == 0 || edges.len() + 1 == vertex_count,
        components: algorithms::component_count(adjacency),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GraphError, ShapeError};
    use crate::mst::compute_mst;

    #[test]
    fn summary_of_disconnected_graph() {
        let m = AdjacencyMatrix::from_rows(&[
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let tree = compute_mst(&m, None).unwrap();
        let summary = summarize(&tree, &m, None).unwrap();

        assert_eq!(summary.edge_count, 1);
        assert_eq!(summary.total_weight, 1.0);
        assert!(!summary.spanning);
        assert_eq!(summary.components, 2);
        assert!(is_valid_tree(&tree, &m));
    }

    #[test]
    fn weighted_total() {
        let m = AdjacencyMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let w = WeightMatrix::for_adjacency(&[vec![0.0, 3.5], vec![3.5, 0.0]], &m).unwrap();
        let summary = summarize(&[(0, 1)], &m, Some(&w)).unwrap();
        assert_eq!(summary.total_weight, 3.5);
        assert!(summary.spanning);
    }

    #[test]
    fn rejects_weights_of_another_size() {
        let pair = AdjacencyMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let w = WeightMatrix::for_adjacency(&[vec![0.0, 3.5], vec![3.5, 0.0]], &pair).unwrap();
        let path = AdjacencyMatrix::from_rows(&[
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap();

        assert_eq!(
            summarize(&[(0, 1)], &path, Some(&w)).unwrap_err(),
            GraphError::Shape(ShapeError::DimensionMismatch {
                adjacency: 3,
                weight: 2
            })
        );
    }

    #[test]
    fn rejects_invented_edges() {
        let m = AdjacencyMatrix::from_rows(&[
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        assert!(!is_valid_tree(&[(0, 2)], &m));
        assert!(!is_valid_tree(&[(0, 9)], &m));
    }
}
