//! Two-period merge.
//!
//! Full outer join of the per-project summaries on project name. A
//! project reported in only one period keeps the placeholder dash on
//! the other side. Rows come out sorted ascending by project name
//! (byte order), which keeps repeated runs byte-identical.

use std::collections::BTreeMap;

use crate::types::{ConsolidatedRow, ConsolidatedTable, ProjectSummary};
use crate::PLACEHOLDER;

/// Outer-join this week's and next week's summaries into the final
/// consolidated table.
pub fn merge_periods(
    this_period: Vec<ProjectSummary>,
    next_period: Vec<ProjectSummary>,
) -> ConsolidatedTable {
    let mut merged: BTreeMap<String, (Option<String>, Option<String>)> = BTreeMap::new();

    for summary in this_period {
        merged.entry(summary.project).or_default().0 = Some(summary.text);
    }
    for summary in next_period {
        merged.entry(summary.project).or_default().1 = Some(summary.text);
    }

    let rows = merged
        .into_iter()
        .map(|(project, (this, next))| ConsolidatedRow {
            project,
            this_period: this.unwrap_or_else(|| PLACEHOLDER.to_string()),
            next_period: next.unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
        .collect();

    ConsolidatedTable { rows }
}
