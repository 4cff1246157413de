//! Sheet layout configuration.
//!
//! The source template keeps two parallel column blocks on one sheet,
//! separated by a blank spacer column. The offsets are a structural
//! assumption about the template, so they live in configuration
//! rather than in the splitting code.

use serde::{Deserialize, Serialize};

/// Column offsets for one period's (contributor, project, task) block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTriple {
    pub contributor: usize,
    pub project: usize,
    pub task: usize,
}

impl ColumnTriple {
    pub fn new(contributor: usize, project: usize, task: usize) -> Self {
        Self {
            contributor,
            project,
            task,
        }
    }
}

/// Where to find headers and period blocks in the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Tokens that identify the header row. A row counts as the
    /// header when any trimmed cell contains one of these.
    pub header_markers: Vec<String>,
    /// Column block for the current week.
    pub this_period: ColumnTriple,
    /// Column block for the coming week.
    pub next_period: ColumnTriple,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            header_markers: vec!["팀원".to_string(), "프로젝트".to_string()],
            // Columns 0-2 this week, column 3 is a visual gap,
            // columns 4-6 next week.
            this_period: ColumnTriple::new(0, 1, 2),
            next_period: ColumnTriple::new(4, 5, 6),
        }
    }
}

impl SheetLayout {
    pub fn new(
        header_markers: Vec<String>,
        this_period: ColumnTriple,
        next_period: ColumnTriple,
    ) -> Self {
        Self {
            header_markers,
            this_period,
            next_period,
        }
    }
}
