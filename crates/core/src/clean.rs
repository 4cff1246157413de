//! Record cleaning: trim, sentinel filtering, deduplication.
//!
//! Exported report sheets repeat header labels mid-sheet and carry
//! placeholder text in unused cells, so cell presence alone is not
//! enough — known sentinel strings have to be filtered out as well.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{CleanRecord, Period, RawRecord};

/// Case-insensitive sentinel sets for the project and task columns.
///
/// A sentinel is a string that looks like data but must be treated as
/// absent: stringified NaN/None, repeated header labels, template
/// placeholder phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanPolicy {
    /// Values that disqualify a project cell (stored lowercase).
    project_sentinels: Vec<String>,
    /// Values that disqualify a task cell (stored lowercase).
    task_sentinels: Vec<String>,
}

impl Default for CleanPolicy {
    fn default() -> Self {
        Self::new(
            &["", "nan", "none", "프로젝트"],
            &["", "nan", "none", "주요 업무 내용", "내용"],
        )
    }
}

impl CleanPolicy {
    /// Build a policy from sentinel lists; comparison is
    /// case-insensitive, so the values are lowercased up front.
    pub fn new(project_sentinels: &[&str], task_sentinels: &[&str]) -> Self {
        Self {
            project_sentinels: project_sentinels.iter().map(|s| s.to_lowercase()).collect(),
            task_sentinels: task_sentinels.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    fn is_project_sentinel(&self, value: &str) -> bool {
        let lowered = value.to_lowercase();
        self.project_sentinels.iter().any(|s| *s == lowered)
    }

    fn is_task_sentinel(&self, value: &str) -> bool {
        let lowered = value.to_lowercase();
        self.task_sentinels.iter().any(|s| *s == lowered)
    }

    /// Clean one period's raw records:
    /// 1. drop records with an absent project or task cell,
    /// 2. trim all fields,
    /// 3. drop records whose project or task is a sentinel,
    /// 4. deduplicate on (project, task), first occurrence wins.
    pub fn clean(&self, records: Vec<RawRecord>, period: Period) -> Vec<CleanRecord> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut cleaned = Vec::new();

        for record in records {
            let (Some(project), Some(task)) = (record.project, record.task) else {
                continue;
            };

            let project = project.trim().to_string();
            let task = task.trim().to_string();

            if self.is_project_sentinel(&project) || self.is_task_sentinel(&task) {
                continue;
            }

            if !seen.insert((project.clone(), task.clone())) {
                continue;
            }

            cleaned.push(CleanRecord {
                contributor: record
                    .contributor
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or("")
                    .to_string(),
                project,
                task,
            });
        }

        log::debug!("{}: {} records after cleaning", period.as_str(), cleaned.len());
        cleaned
    }
}
