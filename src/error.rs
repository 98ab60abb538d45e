//! Error types for matrix construction and graph generation

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, GraphError>;

/// Top-level error, split by the kind of input that was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Malformed numeric text
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Matrix has the wrong shape or content for its role
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Invalid generation parameters
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Raised while turning text into numbers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("row {row}, column {column}: `{token}` is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("row {row}, column {column}: value is not finite")]
    NonFinite { row: usize, column: usize },

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("`{0}` is not an integer")]
    InvalidInteger(String),
}

/// Raised when a matrix is numerically fine but structurally wrong
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("matrix is not square: {rows} rows, {columns} columns")]
    NotSquare { rows: usize, columns: usize },

    #[error("row {row} has {found} entries in a {expected}x{expected} matrix")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("negative adjacency entry at ({row}, {column})")]
    NegativeEntry { row: usize, column: usize },

    #[error("matrix is not symmetric at ({row}, {column})")]
    Asymmetric { row: usize, column: usize },

    #[error("weight matrix is {weight}x{weight}, adjacency matrix is {adjacency}x{adjacency}")]
    DimensionMismatch { adjacency: usize, weight: usize },
}

/// Raised for unusable GV parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("graph size must be at least 1, got {0}")]
    InvalidSize(i64),

    #[error("graph size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: i64, max: i64 },

    #[error("divider must be positive, got {0}")]
    InvalidDivider(i64),

    #[error("at least one divider is required")]
    NoDividers,
}

impl GraphError {
    /// Short name of the error family, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::Parse(_) => "ParseError",
            GraphError::Shape(_) => "ShapeError",
            GraphError::Config(_) => "ConfigError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let err: GraphError = ParseError::InvalidInteger("x".into()).into();
        assert_eq!(err.kind(), "ParseError");

        let err: GraphError = ShapeError::NotSquare { rows: 2, columns: 3 }.into();
        assert_eq!(err.kind(), "ShapeError");
        assert_eq!(err.to_string(), "matrix is not square: 2 rows, 3 columns");

        let err: GraphError = ConfigError::InvalidSize(0).into();
        assert_eq!(err.kind(), "ConfigError");
    }
}
