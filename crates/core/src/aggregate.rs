//! Per-project aggregation.
//!
//! Groups a period's cleaned records by project and joins each group's
//! task texts into one bulleted block. Group order follows first
//! appearance in the input; the merger imposes the final sort.

use std::collections::HashMap;

use crate::refine::TextRefiner;
use crate::types::{CleanRecord, ProjectSummary};
use crate::BULLET;

/// Groups records into one `ProjectSummary` per project, optionally
/// passing each block through the text refiner.
#[derive(Debug, Clone, Default)]
pub struct ProjectAggregator {
    refiner: Option<TextRefiner>,
}

impl ProjectAggregator {
    /// Aggregator that bullet-joins without refinement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer the refiner over each project's joined block.
    pub fn with_refiner(mut self, refiner: TextRefiner) -> Self {
        self.refiner = Some(refiner);
        self
    }

    /// Build one summary per distinct project, in first-seen order.
    pub fn aggregate(&self, records: &[CleanRecord]) -> Vec<ProjectSummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut tasks: HashMap<&str, Vec<&str>> = HashMap::new();

        for record in records {
            let entry = tasks.entry(record.project.as_str()).or_default();
            if entry.is_empty() {
                order.push(record.project.as_str());
            }
            entry.push(record.task.as_str());
        }

        order
            .into_iter()
            .map(|project| {
                let bulleted = tasks[project]
                    .iter()
                    .map(|task| format!("{}{}", BULLET, task))
                    .collect::<Vec<_>>()
                    .join("\n");

                let text = match &self.refiner {
                    Some(refiner) => refiner.refine(&bulleted),
                    None => bulleted,
                };

                ProjectSummary {
                    project: project.to_string(),
                    text,
                }
            })
            .collect()
    }
}
