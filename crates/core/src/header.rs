//! Header row location.
//!
//! Report sheets usually carry a title block above the real header, so
//! the header row has to be found by scanning rather than assumed at
//! row zero. Marker matching is substring containment on trimmed
//! cells: a header cell reading "프로젝트명" still counts for the
//! marker "프로젝트".

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Scan rows top-to-bottom for the first row where any trimmed cell
/// contains one of the marker tokens. Returns the header row index.
pub fn locate_header(grid: &Grid, markers: &[String]) -> Result<usize> {
    for (idx, row) in grid.rows().iter().enumerate() {
        let is_header = row.iter().any(|cell| {
            let Some(text) = cell.as_deref() else {
                return false;
            };
            let trimmed = text.trim();
            !trimmed.is_empty() && markers.iter().any(|m| trimmed.contains(m.as_str()))
        });

        if is_header {
            log::debug!("header row located at index {}", idx);
            return Ok(idx);
        }
    }

    Err(Error::HeaderNotFound {
        markers: markers.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::row_of;

    fn markers() -> Vec<String> {
        vec!["팀원".to_string(), "프로젝트".to_string()]
    }

    #[test]
    fn test_finds_header_after_title_block() {
        let grid = Grid::from_rows(vec![
            row_of(&["주간업무보고", "", ""]),
            row_of(&["", "", ""]),
            row_of(&["팀원", "프로젝트", "내용"]),
            row_of(&["A", "P1", "did X"]),
        ]);
        assert_eq!(locate_header(&grid, &markers()).unwrap(), 2);
    }

    #[test]
    fn test_containment_matches_decorated_label() {
        let grid = Grid::from_rows(vec![row_of(&["담당 팀원", "프로젝트명", "내용"])]);
        assert_eq!(locate_header(&grid, &markers()).unwrap(), 0);
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let grid = Grid::from_rows(vec![
            row_of(&["A", "P1", "did X"]),
            row_of(&["B", "P2", "did Y"]),
        ]);
        let err = locate_header(&grid, &markers()).unwrap_err();
        assert!(matches!(err, Error::HeaderNotFound { .. }));
    }

    #[test]
    fn test_absent_cells_do_not_match() {
        let grid = Grid::from_rows(vec![vec![None, None], row_of(&["팀원", "프로젝트"])]);
        assert_eq!(locate_header(&grid, &markers()).unwrap(), 1);
    }

    #[test]
    fn test_empty_grid_is_header_not_found() {
        let grid = Grid::new();
        assert!(matches!(
            locate_header(&grid, &markers()),
            Err(Error::HeaderNotFound { .. })
        ));
    }
}
