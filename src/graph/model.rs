//! Node/link graph shape shared with the rendering layer

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A vertex, identified by its 1-based id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
}

/// An undirected link between two node ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
}

impl Link {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Whether this link joins `a` and `b`, in either direction
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Canonical `{ nodes, links }` graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Graph {
    /// Graph with no nodes and no links
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn contains_node(&self, id: usize) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Undirected link lookup
    pub fn contains_link(&self, a: usize, b: usize) -> bool {
        self.links.iter().any(|link| link.joins(a, b))
    }

    /// Node ids are unique and every link endpoint is a node
    pub fn is_consistent(&self) -> bool {
        let ids: HashSet<usize> = self.nodes.iter().map(|node| node.id).collect();
        ids.len() == self.nodes.len()
            && self
                .links
                .iter()
                .all(|link| ids.contains(&link.source) && ids.contains(&link.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_lookup_ignores_direction() {
        let graph = Graph {
            nodes: vec![Node { id: 1 }, Node { id: 2 }],
            links: vec![Link::new(2, 1)],
        };
        assert!(graph.contains_link(1, 2));
        assert!(graph.contains_link(2, 1));
        assert!(!graph.contains_link(1, 3));
        assert!(graph.is_consistent());
    }

    #[test]
    fn dangling_link_is_inconsistent() {
        let graph = Graph {
            nodes: vec![Node { id: 1 }],
            links: vec![Link::new(1, 2)],
        };
        assert!(!graph.is_consistent());

        let duplicated = Graph {
            nodes: vec![Node { id: 1 }, Node { id: 1 }],
            links: vec![],
        };
        assert!(!duplicated.is_consistent());
    }

    #[test]
    fn serializes_in_renderer_shape() {
        let graph = Graph {
            nodes: vec![Node { id: 1 }, Node { id: 2 }],
            links: vec![Link::new(1, 2)],
        };
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(
            json,
            r#"{"nodes":[{"id":1},{"id":2}],"links":[{"source":1,"target":2}]}"#
        );
    }
}
