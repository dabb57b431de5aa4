//! Aggregate counters for the dashboard header.

use super::entities::Project;
use super::schedule::is_overdue;
use super::value_objects::ProjectStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Counters shown in the stats dashboard.
///
/// `overdue` overlaps with the status counts: an overdue project is also
/// counted under its stored status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl ProjectStats {
    /// Compute stats over the full project list.
    pub fn collect(projects: &[Project], today: NaiveDate) -> Self {
        let mut stats = Self {
            total: projects.len(),
            ..Default::default()
        };

        for project in projects {
            match project.status {
                ProjectStatus::NotStarted => stats.not_started += 1,
                ProjectStatus::InProgress => stats.in_progress += 1,
                ProjectStatus::Completed => stats.completed += 1,
            }
            if is_overdue(project.deadline, project.status, today) {
                stats.overdue += 1;
            }
        }

        stats
    }

    /// Completed share as a whole percentage, 0 when the list is empty.
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::entities::ProjectDraft;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(deadline: NaiveDate, status: ProjectStatus) -> Project {
        Project::create(
            ProjectDraft::new("p", deadline).with_status(status),
            Utc::now(),
        )
    }

    #[test]
    fn test_collect_counts_by_status_and_overdue() {
        let today = date(2026, 8, 7);
        let projects = vec![
            project(date(2026, 8, 1), ProjectStatus::NotStarted), // overdue
            project(date(2026, 8, 1), ProjectStatus::Completed),  // exempt
            project(date(2026, 8, 20), ProjectStatus::InProgress),
            project(date(2026, 8, 20), ProjectStatus::Completed),
        ];

        let stats = ProjectStats::collect(&projects, today);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.not_started, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_percent(), 50);
    }

    #[test]
    fn test_empty_list() {
        let stats = ProjectStats::collect(&[], date(2026, 8, 7));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_percent(), 0);
    }

    #[test]
    fn test_completion_percent_rounds() {
        let today = date(2026, 8, 7);
        let projects = vec![
            project(date(2026, 8, 20), ProjectStatus::Completed),
            project(date(2026, 8, 20), ProjectStatus::NotStarted),
            project(date(2026, 8, 20), ProjectStatus::NotStarted),
        ];
        // 1/3 rounds to 33
        assert_eq!(ProjectStats::collect(&projects, today).completion_percent(), 33);
    }
}
