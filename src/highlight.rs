//! The currently highlighted subgraph

use crate::graph::builder::GraphBuilder;
use crate::graph::model::{Graph, Link, Node};
use crate::mst::MstEdge;

/// Holds exactly one highlighted subgraph.
///
/// Every update replaces the previous value; nothing is merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightModel {
    current: Graph,
}

impl HighlightModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Graph {
        &self.current
    }

    /// Replace the highlighted subgraph
    pub fn set_highlighted(&mut self, graph: Graph) {
        self.current = graph;
    }

    /// Clear the highlight, used whenever the source graph changes
    pub fn reset(&mut self) {
        self.current = Graph::empty();
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Whether the link between node ids `a` and `b` is highlighted
    pub fn is_link_highlighted(&self, a: usize, b: usize) -> bool {
        self.current.contains_link(a, b)
    }

    pub fn is_node_highlighted(&self, id: usize) -> bool {
        self.current.contains_node(id)
    }
}

/// Highlight for a finished tree: every vertex plus the tree links
pub fn highlight_from_mst(edges: &[MstEdge], vertex_count: usize) -> Graph {
    Graph {
        nodes: (1..=vertex_count).map(|id| Node { id }).collect(),
        links: edges
            .iter()
            .map(|&(source, target)| Link::new(source + 1, target + 1))
            .collect(),
    }
}

/// Highlight for a partial tree: only the vertices its edges touch
pub fn highlight_from_partial_mst(edges: &[MstEdge]) -> Graph {
    let mut builder = GraphBuilder::with_capacity(edges.len() + 1, edges.len());
    for &(source, target) in edges {
        builder.add_link(source + 1, target + 1);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_without_merging() {
        let mut model = HighlightModel::new();
        model.set_highlighted(highlight_from_partial_mst(&[(0, 1)]));
        model.set_highlighted(highlight_from_partial_mst(&[(2, 3)]));

        assert!(model.is_link_highlighted(3, 4));
        assert!(!model.is_link_highlighted(1, 2));
        assert!(!model.is_node_highlighted(1));

        model.reset();
        assert!(model.is_empty());
    }

    #[test]
    fn partial_highlight_has_unique_nodes() {
        let graph = highlight_from_partial_mst(&[(0, 1), (1, 2), (0, 3)]);
        let ids: Vec<usize> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(graph.links.len(), 3);
        assert!(graph.is_consistent());
    }

    #[test]
    fn batch_highlight_keeps_all_vertices() {
        let graph = highlight_from_mst(&[(0, 1)], 3);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.links, vec![Link::new(1, 2)]);
        assert!(graph.is_consistent());
    }

    #[test]
    fn link_lookup_is_undirected() {
        let mut model = HighlightModel::new();
        model.set_highlighted(highlight_from_mst(&[(2, 0)], 3));
        assert!(model.is_link_highlighted(1, 3));
        assert!(model.is_link_highlighted(3, 1));
    }
}
