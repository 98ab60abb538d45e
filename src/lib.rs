//! Graph construction and Prim MST engine behind the force-graph visualizer

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod mst;
pub mod session;
pub mod storage;
pub mod viz;

pub use config::Config;
pub use error::{ConfigError, GraphError, ParseError, Result, ShapeError};
pub use graph::{adjacency_matrix_to_graph, AdjacencyMatrix, Graph, GvParams, WeightMatrix};
pub use highlight::HighlightModel;
pub use mst::{compute_mst, compute_mst_steps, MstEdgeList, PrimSteps};
pub use session::{AnimationStatus, MstAnimation, Session, SessionEvent};
