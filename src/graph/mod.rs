//! Graph representation, generation and conversion

pub mod algorithms;
pub mod builder;
pub mod convert;
pub mod generator;
pub mod matrix;
pub mod model;

pub use builder::GraphBuilder;
pub use convert::adjacency_matrix_to_graph;
pub use generator::{generate, generate_with, GeneratorOptions, GvParams};
pub use matrix::{AdjacencyMatrix, WeightMatrix};
pub use model::{Graph, Link, Node};
