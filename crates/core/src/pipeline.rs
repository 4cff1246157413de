//! The full extraction-and-consolidation pipeline.
//!
//! Wires the stages in dependency order: header location, column
//! splitting, cleaning, aggregation (with optional refinement), and
//! the two-period merge. One report per call, single-threaded, no
//! state between calls.

use crate::aggregate::ProjectAggregator;
use crate::clean::CleanPolicy;
use crate::error::Result;
use crate::grid::Grid;
use crate::header::locate_header;
use crate::layout::SheetLayout;
use crate::merge::merge_periods;
use crate::refine::TextRefiner;
use crate::split::split_period;
use crate::types::{ConsolidatedTable, Period};

/// Converts a raw cell grid into the consolidated two-period table.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    layout: SheetLayout,
    policy: CleanPolicy,
    refiner: Option<TextRefiner>,
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self {
            layout: SheetLayout::default(),
            policy: CleanPolicy::default(),
            refiner: Some(TextRefiner::new()),
        }
    }
}

impl ReportPipeline {
    /// Pipeline with the default layout, sentinel policy, and the
    /// built-in refinement rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a non-default sheet layout.
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Use a non-default sentinel policy.
    pub fn with_policy(mut self, policy: CleanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace or disable (`None`) the refinement stage.
    pub fn with_refiner(mut self, refiner: Option<TextRefiner>) -> Self {
        self.refiner = refiner;
        self
    }

    /// Run the whole pipeline over one grid.
    ///
    /// Fails only when no header row can be found; every later stage
    /// recovers row-by-row. An empty table is a valid "nothing to
    /// report" outcome.
    pub fn convert(&self, grid: &Grid) -> Result<ConsolidatedTable> {
        let header_idx = locate_header(grid, &self.layout.header_markers)?;
        let body = grid.body_from(header_idx + 1);
        log::debug!("{} data rows after header", body.len());

        let this_raw = split_period(body, self.layout.this_period, Period::ThisWeek);
        let next_raw = split_period(body, self.layout.next_period, Period::NextWeek);

        let this_clean = self.policy.clean(this_raw, Period::ThisWeek);
        let next_clean = self.policy.clean(next_raw, Period::NextWeek);

        if this_clean.is_empty() && next_clean.is_empty() {
            log::warn!("no valid records in either period; emitting an empty table");
        }

        let mut aggregator = ProjectAggregator::new();
        if let Some(refiner) = &self.refiner {
            aggregator = aggregator.with_refiner(refiner.clone());
        }

        let this_summaries = aggregator.aggregate(&this_clean);
        let next_summaries = aggregator.aggregate(&next_clean);

        let table = merge_periods(this_summaries, next_summaries);
        log::debug!("consolidated {} projects", table.rows.len());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::grid::row_of;

    fn report_grid() -> Grid {
        Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용", "", "팀원", "프로젝트", "내용"]),
            row_of(&["A", "P1", "did X", "", "B", "P1", "will do Y"]),
            row_of(&["C", "P2", "did Z", "", "", "", ""]),
        ])
    }

    #[test]
    fn test_spec_scenario() {
        let table = ReportPipeline::new().convert(&report_grid()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].project, "P1");
        assert_eq!(table.rows[0].this_period, "• did X");
        assert_eq!(table.rows[0].next_period, "• will do Y");
        assert_eq!(table.rows[1].project, "P2");
        assert_eq!(table.rows[1].this_period, "• did Z");
        assert_eq!(table.rows[1].next_period, "-");
    }

    #[test]
    fn test_deterministic_across_runs() {
        let pipeline = ReportPipeline::new();
        let first = pipeline.convert(&report_grid()).unwrap();
        let second = pipeline.convert(&report_grid()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_tasks_collapse_to_one_bullet() {
        let grid = Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용"]),
            row_of(&["A", "P1", "same task"]),
            row_of(&["B", "P1", "same task"]),
        ]);

        let table = ReportPipeline::new().convert(&grid).unwrap();
        assert_eq!(table.rows[0].this_period, "• same task");
    }

    #[test]
    fn test_refinement_applies_end_to_end() {
        let grid = Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용"]),
            row_of(&["A", "P1", "작업 진행 중입니다"]),
        ]);

        let table = ReportPipeline::new().convert(&grid).unwrap();
        assert_eq!(table.rows[0].this_period, "• 작업 진행");
    }

    #[test]
    fn test_refiner_disabled_keeps_raw_text() {
        let grid = Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용"]),
            row_of(&["A", "P1", "작업 진행 중입니다"]),
        ]);

        let table = ReportPipeline::new()
            .with_refiner(None)
            .convert(&grid)
            .unwrap();
        assert_eq!(table.rows[0].this_period, "• 작업 진행 중입니다");
    }

    #[test]
    fn test_no_header_fails_distinctly() {
        let grid = Grid::from_rows(vec![row_of(&["A", "P1", "did X"])]);
        let err = ReportPipeline::new().convert(&grid).unwrap_err();
        assert!(matches!(err, Error::HeaderNotFound { .. }));
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let grid = Grid::from_rows(vec![row_of(&["팀원", "프로젝트", "내용"])]);
        let table = ReportPipeline::new().convert(&grid).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_output_projects_are_union_of_periods() {
        let grid = Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용", "", "팀원", "프로젝트", "내용"]),
            row_of(&["A", "Left only", "did X", "", "B", "Right only", "will do Y"]),
        ]);

        let table = ReportPipeline::new().convert(&grid).unwrap();
        assert_eq!(table.projects(), vec!["Left only", "Right only"]);

        let left = &table.rows[0];
        assert_eq!(left.next_period, "-");
        let right = &table.rows[1];
        assert_eq!(right.this_period, "-");
    }

    #[test]
    fn test_short_rows_do_not_abort() {
        let grid = Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용", "", "팀원", "프로젝트", "내용"]),
            // Too short for the right block.
            row_of(&["A", "P1", "did X"]),
            row_of(&["B", "P2", "did Y", "", "C", "P3", "will do Z"]),
        ]);

        let table = ReportPipeline::new().convert(&grid).unwrap();
        assert_eq!(table.projects(), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_sentinel_rows_are_dropped() {
        // Header labels repeated mid-sheet must not become records.
        let grid = Grid::from_rows(vec![
            row_of(&["팀원", "프로젝트", "내용", "", "팀원", "프로젝트", "내용"]),
            row_of(&["", "프로젝트", "주요 업무 내용", "", "", "프로젝트", "주요 업무 내용"]),
            row_of(&["A", "P1", "did X", "", "", "nan", "nan"]),
        ]);

        let table = ReportPipeline::new().convert(&grid).unwrap();
        assert_eq!(table.projects(), vec!["P1"]);
        assert_eq!(table.rows[0].next_period, "-");
    }
}
