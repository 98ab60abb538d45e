//! Minimum spanning tree computation

pub mod metrics;
pub mod prim;

pub use metrics::{summarize, MstSummary};
pub use prim::{compute_mst, compute_mst_steps, PrimSteps};

/// Tree edge as `(source, target)` with 0-based vertex indices; `source` is
/// the endpoint that was already in the tree
pub type MstEdge = (usize, usize);

/// Tree edges in the order they were added
pub type MstEdgeList = Vec<MstEdge>;
