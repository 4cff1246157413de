//! Domain types for the two-period report consolidation.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// One of the two reporting windows laid out as parallel column
/// blocks in the source sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    /// The left column block: work done this week.
    ThisWeek,
    /// The right column block: work planned for next week.
    NextWeek,
}

impl Period {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::ThisWeek => "this week",
            Period::NextWeek => "next week",
        }
    }
}

/// The format of the source report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// XLSX workbook (Office Open XML, a ZIP container).
    Xlsx,
    /// Plain CSV.
    Csv,
}

impl SourceFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "xlsx" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Detect format from file magic bytes. CSV has no magic, so only
    /// the ZIP signature of XLSX is recognizable here.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        // XLSX is a ZIP file (PK\x03\x04)
        if bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Xlsx);
        }
        None
    }
}

/// A (contributor, project, task) triple sliced straight out of the
/// grid. Not yet validated; any field may be absent or a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub contributor: Cell,
    pub project: Cell,
    pub task: Cell,
}

/// A record that survived cleaning: project and task are trimmed,
/// non-empty, not sentinels, and the (project, task) pair is unique
/// within its period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Trimmed contributor name; may be empty.
    pub contributor: String,
    pub project: String,
    pub task: String,
}

/// One project's bulleted task block for a single period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project: String,
    /// Newline-joined bullet lines.
    pub text: String,
}

/// Final output unit: one row per project, both periods merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRow {
    pub project: String,
    /// This-period summary text, or the placeholder dash.
    pub this_period: String,
    /// Next-period summary text, or the placeholder dash.
    pub next_period: String,
}

/// The consolidated report table, sorted by project name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedTable {
    pub rows: Vec<ConsolidatedRow>,
}

impl ConsolidatedTable {
    /// An empty table means "nothing to report", not a failure.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Project names in table (sorted) order.
    pub fn projects(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.project.as_str()).collect()
    }

    /// Split the rows into fixed-size pages for rendering. A page
    /// size of zero is clamped to one row per page.
    pub fn paginate(&self, rows_per_page: usize) -> Vec<&[ConsolidatedRow]> {
        let per_page = rows_per_page.max(1);
        self.rows.chunks(per_page).collect()
    }
}
