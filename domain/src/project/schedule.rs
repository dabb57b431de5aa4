//! Deadline arithmetic and human-readable due-date labels.
//!
//! All functions take `today` explicitly so they stay pure and testable;
//! only the outermost callers ask the clock.

use super::entities::Project;
use super::value_objects::ProjectStatus;
use chrono::NaiveDate;

/// Days from `today` until `deadline`. Negative when the deadline has passed.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Whether a project is overdue. Completed projects are never overdue.
pub fn is_overdue(deadline: NaiveDate, status: ProjectStatus, today: NaiveDate) -> bool {
    if status.is_completed() {
        return false;
    }
    days_until(deadline, today) < 0
}

/// Status label for a project card.
///
/// Overdue wins over everything; deadlines within a week are shown as a
/// countdown; otherwise the plain status name is used.
pub fn status_text(project: &Project, today: NaiveDate) -> String {
    if is_overdue(project.deadline, project.status, today) {
        return "Overdue".to_string();
    }

    let days = days_until(project.deadline, today);
    if days == 0 {
        return "Due Today".to_string();
    }
    if days == 1 {
        return "Due Tomorrow".to_string();
    }
    if days > 0 && days <= 7 {
        return format!("{} days left", days);
    }

    project.status.display_name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::entities::ProjectDraft;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project_due(deadline: NaiveDate, status: ProjectStatus) -> Project {
        let draft = ProjectDraft::new("Essay", deadline).with_status(status);
        Project::create(draft, Utc::now())
    }

    #[test]
    fn test_days_until() {
        let today = date(2026, 8, 7);
        assert_eq!(days_until(date(2026, 8, 10), today), 3);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(date(2026, 8, 1), today), -6);
    }

    #[test]
    fn test_completed_is_never_overdue() {
        let today = date(2026, 8, 7);
        assert!(is_overdue(
            date(2026, 8, 1),
            ProjectStatus::InProgress,
            today
        ));
        assert!(!is_overdue(
            date(2026, 8, 1),
            ProjectStatus::Completed,
            today
        ));
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let today = date(2026, 8, 7);
        assert!(!is_overdue(today, ProjectStatus::NotStarted, today));
    }

    #[test]
    fn test_status_text_countdown_window() {
        let today = date(2026, 8, 7);

        let p = project_due(date(2026, 8, 1), ProjectStatus::InProgress);
        assert_eq!(status_text(&p, today), "Overdue");

        let p = project_due(today, ProjectStatus::NotStarted);
        assert_eq!(status_text(&p, today), "Due Today");

        let p = project_due(date(2026, 8, 8), ProjectStatus::NotStarted);
        assert_eq!(status_text(&p, today), "Due Tomorrow");

        let p = project_due(date(2026, 8, 12), ProjectStatus::NotStarted);
        assert_eq!(status_text(&p, today), "5 days left");

        // Exactly a week out still counts down; beyond that, the status name
        let p = project_due(date(2026, 8, 14), ProjectStatus::NotStarted);
        assert_eq!(status_text(&p, today), "7 days left");

        let p = project_due(date(2026, 8, 15), ProjectStatus::NotStarted);
        assert_eq!(status_text(&p, today), "Not Started");
    }

    #[test]
    fn test_status_text_completed_past_deadline() {
        let today = date(2026, 8, 7);
        let p = project_due(date(2026, 8, 1), ProjectStatus::Completed);
        assert_eq!(status_text(&p, today), "Completed");
    }
}
