//! Column-block splitting.
//!
//! Slices each data row into per-period (contributor, project, task)
//! triples at the layout's fixed offsets. PDF and spreadsheet
//! extraction often produces ragged rows, so a row that is too short
//! to hold a period's project or task column is skipped for that
//! period only and never aborts the pass.

use crate::grid::Cell;
use crate::layout::ColumnTriple;
use crate::types::{Period, RawRecord};

/// Read one period's records out of the post-header data rows.
pub fn split_period(rows: &[Vec<Cell>], cols: ColumnTriple, period: Period) -> Vec<RawRecord> {
    let mut records = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        // The project and task columns must at least exist in the row;
        // a shorter row is malformed for this period.
        if row.len() <= cols.project || row.len() <= cols.task {
            log::debug!(
                "skipping short row {} for {}: {} cells",
                idx,
                period.as_str(),
                row.len()
            );
            continue;
        }

        records.push(RawRecord {
            contributor: row.get(cols.contributor).cloned().flatten(),
            project: row.get(cols.project).cloned().flatten(),
            task: row.get(cols.task).cloned().flatten(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::row_of;

    fn this_cols() -> ColumnTriple {
        ColumnTriple::new(0, 1, 2)
    }

    fn next_cols() -> ColumnTriple {
        ColumnTriple::new(4, 5, 6)
    }

    #[test]
    fn test_splits_both_blocks() {
        let rows = vec![row_of(&["A", "P1", "did X", "", "B", "P1", "will do Y"])];

        let this_week = split_period(&rows, this_cols(), Period::ThisWeek);
        assert_eq!(this_week.len(), 1);
        assert_eq!(this_week[0].contributor.as_deref(), Some("A"));
        assert_eq!(this_week[0].project.as_deref(), Some("P1"));
        assert_eq!(this_week[0].task.as_deref(), Some("did X"));

        let next_week = split_period(&rows, next_cols(), Period::NextWeek);
        assert_eq!(next_week.len(), 1);
        assert_eq!(next_week[0].task.as_deref(), Some("will do Y"));
    }

    #[test]
    fn test_short_row_skipped_for_right_block_only() {
        // Row holds the left block but stops before column 6.
        let rows = vec![row_of(&["C", "P2", "did Z"])];

        assert_eq!(split_period(&rows, this_cols(), Period::ThisWeek).len(), 1);
        assert!(split_period(&rows, next_cols(), Period::NextWeek).is_empty());
    }

    #[test]
    fn test_absent_cells_pass_through_unvalidated() {
        let rows = vec![vec![
            None,
            Some("P1".to_string()),
            None,
            None,
            None,
            None,
            None,
        ]];

        let records = split_period(&rows, this_cols(), Period::ThisWeek);
        assert_eq!(records.len(), 1);
        assert!(records[0].contributor.is_none());
        assert_eq!(records[0].project.as_deref(), Some("P1"));
        assert!(records[0].task.is_none());
    }

    #[test]
    fn test_missing_contributor_column_degrades_to_none() {
        // Contributor at col 4 is out of bounds but project/task fit.
        let cols = ColumnTriple::new(4, 0, 1);
        let rows = vec![row_of(&["P1", "did X"])];

        let records = split_period(&rows, cols, Period::ThisWeek);
        assert_eq!(records.len(), 1);
        assert!(records[0].contributor.is_none());
    }

    #[test]
    fn test_row_exactly_spanning_task_column_is_kept() {
        // Length check is inclusive of the task column and nothing
        // beyond it; no cell is ever indexed out of bounds.
        let rows = vec![row_of(&["A", "P1", "did X"]), row_of(&["B", "P2"])];

        let records = split_period(&rows, this_cols(), Period::ThisWeek);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].task.as_deref(), Some("did X"));
    }

    #[test]
    fn test_empty_rows_yield_no_records() {
        assert!(split_period(&[], this_cols(), Period::ThisWeek).is_empty());
    }
}
