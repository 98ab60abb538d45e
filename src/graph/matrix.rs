//! Validated adjacency and weight matrices

use ndarray::Array2;

use crate::error::{ParseError, Result, ShapeError};

/// Square, symmetric, non-negative edge-presence matrix.
///
/// A cell greater than zero marks an edge. The diagonal is never read as an
/// edge, so self-loops in the input are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    cells: Array2<f64>,
}

/// Edge weights paired with an [`AdjacencyMatrix`] of the same size
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    cells: Array2<f64>,
}

impl AdjacencyMatrix {
    /// Matrix with no vertices
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((0, 0)),
        }
    }

    /// Validate row data as an adjacency matrix
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cells = square_cells(rows)?;

        for ((row, column), &value) in cells.indexed_iter() {
            if value < 0.0 {
                return Err(ShapeError::NegativeEntry { row, column }.into());
            }
        }
        check_symmetric(&cells, |_, _| true)?;

        Ok(Self { cells })
    }

    /// Build directly from a symmetric edge predicate over `i < j`
    pub(crate) fn from_pairs(size: usize, mut has_edge: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Array2::zeros((size, size));
        for i in 0..size {
            for j in (i + 1)..size {
                if has_edge(i, j) {
                    cells[[i, j]] = 1.0;
                    cells[[j, i]] = 1.0;
                }
            }
        }
        Self { cells }
    }

    /// Set an edge in both directions
    pub(crate) fn connect(&mut self, i: usize, j: usize) {
        self.cells[[i, j]] = 1.0;
        self.cells[[j, i]] = 1.0;
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether `i` and `j` are joined by an edge
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i != j && self.cells[[i, j]] > 0.0
    }

    /// Vertices adjacent to `vertex`, in ascending order
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(move |&other| self.has_edge(vertex, other))
    }

    /// Undirected edges as `(i, j)` with `i < j`, row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.has_edge(i, j))
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[[i, j]]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.cells)
    }
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl WeightMatrix {
    /// Validate row data as weights for `adjacency`
    pub fn for_adjacency(rows: &[Vec<f64>], adjacency: &AdjacencyMatrix) -> Result<Self> {
        let weights = Self {
            cells: square_cells(rows)?,
        };
        weights.ensure_matches(adjacency)?;
        Ok(weights)
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Weight of the edge between `i` and `j`
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.cells[[i, j]]
    }

    /// Whether this matrix can be paired with `adjacency`
    pub fn matches(&self, adjacency: &AdjacencyMatrix) -> bool {
        self.size() == adjacency.size()
    }

    /// Check that these weights can be paired with `adjacency`.
    ///
    /// Sizes must agree, and mirror cells must agree on every edge. Cells
    /// without an edge are never read, so filler values there are allowed.
    pub fn ensure_matches(&self, adjacency: &AdjacencyMatrix) -> Result<()> {
        if !self.matches(adjacency) {
            return Err(ShapeError::DimensionMismatch {
                adjacency: adjacency.size(),
                weight: self.size(),
            }
            .into());
        }
        check_symmetric(&self.cells, |i, j| adjacency.has_edge(i, j))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.cells)
    }
}

/// Check squareness and finiteness and copy rows into an `Array2`
fn square_cells(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n = rows.len();

    if let Some(first) = rows.first() {
        if first.len() != n && rows.iter().all(|row| row.len() == first.len()) {
            return Err(ShapeError::NotSquare {
                rows: n,
                columns: first.len(),
            }
            .into());
        }
    }

    let mut cells = Array2::zeros((n, n));
    for (row, values) in rows.iter().enumerate() {
        if values.len() != n {
            return Err(ShapeError::RaggedRow {
                row,
                expected: n,
                found: values.len(),
            }
            .into());
        }
        for (column, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ParseError::NonFinite { row, column }.into());
            }
            cells[[row, column]] = value;
        }
    }

    Ok(cells)
}

/// Mirror cells must be equal wherever `checked(row, column)` holds
fn check_symmetric(cells: &Array2<f64>, checked: impl Fn(usize, usize) -> bool) -> Result<()> {
    let n = cells.nrows();
    for row in 0..n {
        for column in (row + 1)..n {
            if checked(row, column) && cells[[row, column]] != cells[[column, row]] {
                return Err(ShapeError::Asymmetric { row, column }.into());
            }
        }
    }
    Ok(())
}

fn to_rows(cells: &Array2<f64>) -> Vec<Vec<f64>> {
    cells.rows().into_iter().map(|row| row.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn path3() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn accepts_symmetric_square_matrix() {
        let m = AdjacencyMatrix::from_rows(&path3()).unwrap();
        assert_eq!(m.size(), 3);
        assert!(m.has_edge(0, 1));
        assert!(m.has_edge(2, 1));
        assert!(!m.has_edge(0, 2));
        assert_eq!(m.edge_count(), 2);
        assert_eq!(m.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(m.to_rows(), path3());
    }

    #[test]
    fn empty_input_is_an_empty_matrix() {
        let m = AdjacencyMatrix::from_rows(&[]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m, AdjacencyMatrix::empty());
    }

    #[test]
    fn rejects_non_square() {
        let err = AdjacencyMatrix::from_rows(&[vec![0.0, 1.0, 0.0], vec![1.0, 0.0, 0.0]])
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::Shape(ShapeError::NotSquare { rows: 2, columns: 3 })
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = AdjacencyMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::Shape(ShapeError::RaggedRow { row: 1, expected: 2, found: 1 })
        );
    }

    #[test]
    fn rejects_negative_and_nan() {
        let err = AdjacencyMatrix::from_rows(&[vec![0.0, -1.0], vec![-1.0, 0.0]]).unwrap_err();
        assert_eq!(err, GraphError::Shape(ShapeError::NegativeEntry { row: 0, column: 1 }));

        let err = AdjacencyMatrix::from_rows(&[vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert_eq!(err, GraphError::Parse(ParseError::NonFinite { row: 0, column: 1 }));
    }

    #[test]
    fn rejects_directed_input() {
        let err = AdjacencyMatrix::from_rows(&[vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap_err();
        assert_eq!(err, GraphError::Shape(ShapeError::Asymmetric { row: 0, column: 1 }));
    }

    #[test]
    fn diagonal_is_not_an_edge() {
        let m = AdjacencyMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(m.edge_count(), 0);
        assert!(!m.has_edge(0, 0));
    }

    #[test]
    fn weight_matrix_must_match_adjacency() {
        let adjacency = AdjacencyMatrix::from_rows(&path3()).unwrap();
        let weights = vec![vec![0.0, 4.0], vec![4.0, 0.0]];
        let err = WeightMatrix::for_adjacency(&weights, &adjacency).unwrap_err();
        assert_eq!(
            err,
            GraphError::Shape(ShapeError::DimensionMismatch { adjacency: 3, weight: 2 })
        );

        let weights = vec![
            vec![0.0, 4.0, 0.0],
            vec![4.0, 0.0, 2.5],
            vec![0.0, 2.5, 0.0],
        ];
        let w = WeightMatrix::for_adjacency(&weights, &adjacency).unwrap();
        assert!(w.matches(&adjacency));
        assert_eq!(w.weight(1, 2), 2.5);
    }

    #[test]
    fn weight_symmetry_only_matters_on_edges() {
        let adjacency = AdjacencyMatrix::from_rows(&path3()).unwrap();

        // (0, 2) is not an edge, so its filler values may disagree
        let weights = vec![
            vec![0.0, 4.0, 7.0],
            vec![4.0, 0.0, 2.5],
            vec![9.0, 2.5, 0.0],
        ];
        let w = WeightMatrix::for_adjacency(&weights, &adjacency).unwrap();
        assert_eq!(w.weight(0, 1), 4.0);

        let weights = vec![
            vec![0.0, 4.0, 0.0],
            vec![3.0, 0.0, 2.5],
            vec![0.0, 2.5, 0.0],
        ];
        let err = WeightMatrix::for_adjacency(&weights, &adjacency).unwrap_err();
        assert_eq!(err, GraphError::Shape(ShapeError::Asymmetric { row: 0, column: 1 }));

        // Same size, but the filler cell is an edge of this graph
        let w = WeightMatrix::for_adjacency(
            &[vec![0.0, 4.0, 7.0], vec![4.0, 0.0, 2.5], vec![9.0, 2.5, 0.0]],
            &adjacency,
        )
        .unwrap();
        let triangle = AdjacencyMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .unwrap();
        assert!(w.matches(&triangle));
        assert_eq!(
            w.ensure_matches(&triangle).unwrap_err(),
            GraphError::Shape(ShapeError::Asymmetric { row: 0, column: 2 })
        );
    }
}
