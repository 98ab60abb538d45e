//! Prim's algorithm as a pull-based step iterator

use std::borrow::Cow;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::graph::matrix::{AdjacencyMatrix, WeightMatrix};
use crate::mst::MstEdgeList;

/// Candidate edge from a visited vertex to an unvisited one
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    weight: f64,
    source: usize,
    target: usize,
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.source.cmp(&other.source))
            .then(self.target.cmp(&other.target))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

/// One run of Prim's algorithm starting at vertex 0.
///
/// Each call to `next` adds one edge and yields the tree built so far. The
/// iterator ends when the frontier is empty, which happens either when every
/// vertex is in the tree or when the component of vertex 0 is exhausted.
/// Other components are never entered.
///
/// Ties between equal weights go to the lowest source index, then the lowest
/// target index, where the source is the endpoint already in the tree.
#[derive(Debug, Clone)]
pub struct PrimSteps<'a> {
    adjacency: Cow<'a, AdjacencyMatrix>,
    weights: Option<Cow<'a, WeightMatrix>>,
    visited: Vec<bool>,
    frontier: BinaryHeap<Reverse<FrontierEdge>>,
    tree: MstEdgeList,
}

impl<'a> PrimSteps<'a> {
    /// Start a run over borrowed matrices.
    ///
    /// Fails with a `ShapeError` when `weights` does not fit `adjacency`.
    pub fn new(adjacency: &'a AdjacencyMatrix, weights: Option<&'a WeightMatrix>) -> Result<Self> {
        Self::start(Cow::Borrowed(adjacency), weights.map(Cow::Borrowed))
    }

    fn start(
        adjacency: Cow<'a, AdjacencyMatrix>,
        weights: Option<Cow<'a, WeightMatrix>>,
    ) -> Result<Self> {
        if let Some(w) = &weights {
            w.ensure_matches(&adjacency)?;
        }

        let n = adjacency.size();
        let mut steps = Self {
            adjacency,
            weights,
            visited: vec![false; n],
            frontier: BinaryHeap::new(),
            tree: Vec::with_capacity(n.saturating_sub(1)),
        };
        if n > 0 {
            steps.visit(0);
        }
        Ok(steps)
    }

    /// Edge list built so far
    pub fn tree(&self) -> &MstEdgeList {
        &self.tree
    }

    /// Vertices already in the tree
    pub fn visited(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, seen)| **seen)
            .map(|(vertex, _)| vertex)
    }

    /// Run to completion and return the final edge list
    pub fn finish(mut self) -> MstEdgeList {
        while self.advance() {}
        self.tree
    }

    fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights.as_ref().map_or(1.0, |w| w.weight(i, j))
    }

    /// Mark `vertex` visited and extend the frontier with its edges
    fn visit(&mut self, vertex: usize) {
        self.visited[vertex] = true;

        let candidates: Vec<FrontierEdge> = self
            .adjacency
            .neighbors(vertex)
            .filter(|&other| !self.visited[other])
            .map(|other| FrontierEdge {
                weight: self.weight(vertex, other),
                source: vertex,
                target: other,
            })
            .collect();

        self.frontier.extend(candidates.into_iter().map(Reverse));
    }

    /// Add the cheapest frontier edge; false when none is left
    fn advance(&mut self) -> bool {
        while let Some(Reverse(edge)) = self.frontier.pop() {
            // Stale candidate, its target joined the tree through another edge
            if self.visited[edge.target] {
                continue;
            }

            log::debug!(
                "Prim step {}: {} -> {} (weight {})",
                self.tree.len() + 1,
                edge.source,
                edge.target,
                edge.weight
            );
            self.tree.push((edge.source, edge.target));
            self.visit(edge.target);
            return true;
        }
        false
    }
}

impl PrimSteps<'static> {
    /// Start a run that owns its matrices
    pub fn owned(adjacency: AdjacencyMatrix, weights: Option<WeightMatrix>) -> Result<Self> {
        Self::start(Cow::Owned(adjacency), weights.map(Cow::Owned))
    }
}

impl Iterator for PrimSteps<'_> {
    type Item = MstEdgeList;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.tree.clone())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.iter().filter(|&&seen| !seen).count();
        (0, Some(remaining))
    }
}

impl FusedIterator for PrimSteps<'_> {}

/// Compute the spanning tree of vertex 0's component in one call
pub fn compute_mst(
    adjacency: &AdjacencyMatrix,
    weights: Option<&WeightMatrix>,
) -> Result<MstEdgeList> {
    let tree = PrimSteps::new(adjacency, weights)?.finish();
    log::info!(
        "Computed MST with {} edges over {} vertices",
        tree.len(),
        adjacency.size()
    );
    Ok(tree)
}

/// Lazily compute the spanning tree, one snapshot per added edge
pub fn compute_mst_steps<'a>(
    adjacency: &'a AdjacencyMatrix,
    weights: Option<&'a WeightMatrix>,
) -> Result<PrimSteps<'a>> {
    PrimSteps::new(adjacency, weights)
}
