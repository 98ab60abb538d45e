//! Deterministic "GV" adjacency matrix generation
//!
//! A graph is derived from a name, a vertex count and a list of dividers.
//! The character codes of the name form a seed sequence; every vertex pair
//! gets a value mixed from two seed characters, both vertex positions and the
//! size, and the pair is an edge when any divider divides that value.

use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::graph::matrix::AdjacencyMatrix;

/// Largest vertex count GV generation accepts
pub const MAX_GV_SIZE: i64 = 1000;

/// Parameters for GV generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GvParams {
    /// Free text; whitespace is ignored
    pub name: String,

    /// Number of vertices
    pub size: i64,

    /// Edge rule divisors
    pub dividers: Vec<i64>,
}

/// Knobs that do not belong to the user-entered parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Bridge leftover components so the result is connected
    pub connect_components: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            connect_components: true,
        }
    }
}

impl GvParams {
    pub fn new(name: impl Into<String>, size: i64, dividers: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            size,
            dividers,
        }
    }

    /// Check the parameters and return the vertex count and dividers as
    /// unsigned values
    fn validate(&self) -> Result<(usize, Vec<u64>)> {
        if self.size < 1 {
            return Err(ConfigError::InvalidSize(self.size).into());
        }
        if self.size > MAX_GV_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: self.size,
                max: MAX_GV_SIZE,
            }
            .into());
        }
        if self.dividers.is_empty() {
            return Err(ConfigError::NoDividers.into());
        }
        let dividers = self
            .dividers
            .iter()
            .map(|&d| {
                if d < 1 {
                    Err(ConfigError::InvalidDivider(d))
                } else {
                    Ok(d as u64)
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok((self.size as usize, dividers))
    }

    /// Seed sequence: character codes of the name without whitespace
    fn seeds(&self, size: usize) -> Vec<u64> {
        let seeds: Vec<u64> = self
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c as u64)
            .collect();

        if seeds.is_empty() {
            vec![size as u64]
        } else {
            seeds
        }
    }
}

/// Generate a matrix with the default options
pub fn generate(params: &GvParams) -> Result<AdjacencyMatrix> {
    generate_with(params, GeneratorOptions::default())
}

/// Generate the GV adjacency matrix for `params`
pub fn generate_with(params: &GvParams, options: GeneratorOptions) -> Result<AdjacencyMatrix> {
    let (size, dividers) = params.validate()?;
    let seeds = params.seeds(size);

    log::info!(
        "Generating GV graph: size {}, dividers {:?}, {} seed characters",
        size,
        dividers,
        seeds.len()
    );

    let mut matrix = AdjacencyMatrix::from_pairs(size, |i, j| {
        let value = pair_value(&seeds, size, i, j);
        dividers.iter().any(|&d| value % d == 0)
    });

    if options.connect_components {
        let bridges = bridge_components(&mut matrix, &seeds);
        if bridges > 0 {
            log::debug!("Added {} bridge edges to connect the GV graph", bridges);
        }
    }

    log::info!("Generated GV graph with {} edges", matrix.edge_count());
    Ok(matrix)
}

/// Seed-derived value of the pair `i < j`
fn pair_value(seeds: &[u64], size: usize, i: usize, j: usize) -> u64 {
    let len = seeds.len();
    let a = seeds[(i + j) % len];
    let b = seeds[(i * j + size) % len];
    a * (i as u64 + 1) + b * (j as u64 + 1) + size as u64
}

/// Join every vertex to the component holding all lower vertices.
///
/// Returns the number of edges added.
fn bridge_components(matrix: &mut AdjacencyMatrix, seeds: &[u64]) -> usize {
    let n = matrix.size();
    let mut components = UnionFind::<usize>::new(n);
    for (i, j) in matrix.edges().collect::<Vec<_>>() {
        components.union(i, j);
    }

    let mut added = 0;
    for k in 1..n {
        // 0..k already form a single component here
        if components.equiv(k, k - 1) {
            continue;
        }
        let anchor = (pair_value(seeds, n, 0, k) % k as u64) as usize;
        matrix.connect(anchor, k);
        components.union(anchor, k);
        added += 1;
    }
    added
}
