//! Graph construction module

use std::collections::HashMap;

use crate::graph::model::{Graph, Link, Node};

/// Builder for incrementally constructing a [`Graph`].
///
/// Nodes are deduplicated by id and keep the order in which they were first
/// seen. Links are kept in insertion order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from node id to position in `nodes`
    id_to_index: HashMap<usize, usize>,

    nodes: Vec<Node>,

    links: Vec<Link>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given capacity
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(links),
        }
    }

    /// Get or create the node with the given id, returning its position
    pub fn get_or_create_node(&mut self, id: usize) -> usize {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.nodes.len();
        self.id_to_index.insert(id, idx);
        self.nodes.push(Node { id });
        idx
    }

    /// Add a link, creating missing endpoints
    pub fn add_link(&mut self, source: usize, target: usize) {
        self.get_or_create_node(source);
        self.get_or_create_node(target);
        self.links.push(Link { source, target });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Build the graph
    pub fn build(self) -> Graph {
        Graph {
            nodes: self.nodes,
            links: self.links,
        }
    }
}
