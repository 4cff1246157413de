//! Raw cell grid produced by the input readers.
//!
//! A `Grid` is the neutral hand-off between file parsing and the
//! pipeline: rows of text-or-absent cells, 0-indexed, ragged rows
//! allowed. The pipeline never touches file formats directly.

use serde::{Deserialize, Serialize};

/// A single cell: `None` when the source had no value at that
/// position, `Some` with the raw (untrimmed) text otherwise.
pub type Cell = Option<String>;

/// A grid of raw string cells, indexable by (row, column).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from pre-assembled rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Append one row of cells.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The rows starting at `row` (used to slice off everything after
    /// the header). Out-of-range indices yield an empty slice.
    pub fn body_from(&self, row: usize) -> &[Vec<Cell>] {
        self.rows.get(row..).unwrap_or(&[])
    }

    /// Look up a cell by position. Returns `None` when the row does
    /// not exist, the row is too short, or the cell itself is absent.
    ///
    /// This is the whole of the "tolerate short rows" policy: callers
    /// never index rows directly.
    pub fn try_get_cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(col)?
            .as_deref()
    }

    /// Whether the grid holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Convenience for building test grids from string literals.
/// Empty strings become present-but-empty cells, not absent ones.
pub fn row_of(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| Some((*c).to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_get_cell_in_bounds() {
        let grid = Grid::from_rows(vec![row_of(&["a", "b"])]);
        assert_eq!(grid.try_get_cell(0, 0), Some("a"));
        assert_eq!(grid.try_get_cell(0, 1), Some("b"));
    }

    #[test]
    fn test_try_get_cell_short_row() {
        let grid = Grid::from_rows(vec![row_of(&["a"])]);
        assert_eq!(grid.try_get_cell(0, 5), None);
    }

    #[test]
    fn test_try_get_cell_missing_row() {
        let grid = Grid::new();
        assert_eq!(grid.try_get_cell(3, 0), None);
    }

    #[test]
    fn test_try_get_cell_absent_cell() {
        let grid = Grid::from_rows(vec![vec![None, Some("x".to_string())]]);
        assert_eq!(grid.try_get_cell(0, 0), None);
        assert_eq!(grid.try_get_cell(0, 1), Some("x"));
    }

    #[test]
    fn test_body_from_slices_after_header() {
        let grid = Grid::from_rows(vec![
            row_of(&["title"]),
            row_of(&["header"]),
            row_of(&["data1"]),
            row_of(&["data2"]),
        ]);
        let body = grid.body_from(2);
        assert_eq!(body.len(), 2);
        assert_eq!(body[0][0].as_deref(), Some("data1"));
    }

    #[test]
    fn test_body_from_out_of_range() {
        let grid = Grid::from_rows(vec![row_of(&["only"])]);
        assert!(grid.body_from(9).is_empty());
    }
}
