//! Delimited matrix text parsing

use crate::error::{ParseError, Result};
use crate::graph::matrix::{AdjacencyMatrix, WeightMatrix};

/// Parse rows of comma- or whitespace-separated numbers.
///
/// A line containing a comma is split on commas, otherwise on whitespace.
/// Blank lines are skipped. All rows must have the same length.
pub fn parse_numeric_rows(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let row = rows.len();
        let tokens: Vec<&str> = if line.contains(',') {
            line.split(',').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        let values = tokens
            .iter()
            .enumerate()
            .map(|(column, token)| parse_cell(token, row, column))
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != values.len() {
                return Err(ParseError::RaggedRows {
                    row,
                    expected: first.len(),
                    found: values.len(),
                }
                .into());
            }
        }
        rows.push(values);
    }

    Ok(rows)
}

fn parse_cell(token: &str, row: usize, column: usize) -> Result<f64> {
    let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
        row,
        column,
        token: token.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ParseError::NonFinite { row, column }.into());
    }
    Ok(value)
}

/// Parse matrix text into a validated adjacency matrix
pub fn csv_text_to_matrix(text: &str) -> Result<AdjacencyMatrix> {
    let rows = parse_numeric_rows(text)?;
    let matrix = AdjacencyMatrix::from_rows(&rows)?;
    log::info!(
        "Parsed {}x{} adjacency matrix with {} edges",
        matrix.size(),
        matrix.size(),
        matrix.edge_count()
    );
    Ok(matrix)
}

/// Parse matrix text into weights for `adjacency`
pub fn csv_text_to_weights(text: &str, adjacency: &AdjacencyMatrix) -> Result<WeightMatrix> {
    let rows = parse_numeric_rows(text)?;
    let weights = WeightMatrix::for_adjacency(&rows, adjacency)?;
    log::info!("Parsed {}x{} weight matrix", weights.size(), weights.size());
    Ok(weights)
}
