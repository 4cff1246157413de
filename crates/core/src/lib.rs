//! Core domain types and the extraction-and-consolidation pipeline
//! for two-period weekly status reports.

pub mod aggregate;
pub mod clean;
pub mod error;
pub mod grid;
pub mod header;
pub mod layout;
pub mod merge;
pub mod pipeline;
pub mod refine;
pub mod split;
pub mod types;

pub use aggregate::ProjectAggregator;
pub use clean::CleanPolicy;
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use header::locate_header;
pub use layout::{ColumnTriple, SheetLayout};
pub use merge::merge_periods;
pub use pipeline::ReportPipeline;
pub use refine::{RewriteRule, TextRefiner};
pub use types::{
    CleanRecord, ConsolidatedRow, ConsolidatedTable, Period, ProjectSummary, RawRecord,
    SourceFormat,
};

/// Placeholder shown for a period with nothing to report.
pub const PLACEHOLDER: &str = "-";

/// Bullet prefix applied to each task line in a summary.
pub const BULLET: &str = "• ";
