//! Console rendering of projects, listings, and the stats dashboard.

use chrono::NaiveDate;
use colored::Colorize;
use studytrack_domain::{Priority, Project, ProjectStats, ProjectStatus, is_overdue, status_text};

/// How many checklist entries a card shows before collapsing the rest.
const CARD_TASK_LIMIT: usize = 3;

/// Force-disable colored output (for --quiet, `color = false`, or pipes).
/// Enabling restores the default tty detection.
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

/// Formats domain objects for terminal output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full card for a single project.
    pub fn format_card(project: &Project, today: NaiveDate) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}  {}\n",
            project.title.bold(),
            Self::priority_badge(project.priority)
        ));
        out.push_str(&format!("  id: {}\n", project.id.to_string().dimmed()));

        if !project.subject.is_empty() {
            out.push_str(&format!("  Subject: {}\n", project.subject));
        }
        if !project.description.is_empty() {
            out.push_str(&format!("  {}\n", project.description));
        }

        if !project.tasks.is_empty() {
            let (completed, total) = project.task_progress();
            out.push_str(&format!("  Tasks ({}/{}):\n", completed, total));
            for task in project.tasks.iter().take(CARD_TASK_LIMIT) {
                let tick = if task.completed { "✓" } else { "○" };
                let text = if task.completed {
                    task.text.dimmed().to_string()
                } else {
                    task.text.clone()
                };
                out.push_str(&format!("    {} {}  [{}]\n", tick, text, task.id));
            }
            if project.tasks.len() > CARD_TASK_LIMIT {
                out.push_str(&format!(
                    "    +{} more tasks\n",
                    project.tasks.len() - CARD_TASK_LIMIT
                ));
            }
        }

        out.push_str(&format!(
            "  Deadline: {}   Status: {}\n",
            Self::format_date(project.deadline),
            Self::status_badge(project, today)
        ));

        out
    }

    /// Compact one-line-per-project listing.
    pub fn format_list(projects: &[Project], today: NaiveDate, filtered: bool) -> String {
        if projects.is_empty() {
            return if filtered {
                "No projects match your filters.".to_string()
            } else {
                "No projects yet. Create one with `studytrack add`.".to_string()
            };
        }

        let mut out = String::new();
        for project in projects {
            let (completed, total) = project.task_progress();
            let tasks = if total > 0 {
                format!("  [{}/{}]", completed, total)
            } else {
                String::new()
            };

            out.push_str(&format!(
                "{:<12} {}  {}  due {}{}  {}\n",
                Self::status_badge(project, today),
                Self::priority_badge(project.priority),
                project.title.bold(),
                Self::format_date(project.deadline),
                tasks,
                project.id.to_string().dimmed()
            ));
        }
        out
    }

    /// Dashboard counters.
    pub fn format_stats(stats: &ProjectStats) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Projects".bold()));
        out.push_str(&format!("  Total:       {}\n", stats.total));
        out.push_str(&format!("  Not started: {}\n", stats.not_started));
        out.push_str(&format!("  In progress: {}\n", stats.in_progress));
        out.push_str(&format!(
            "  Completed:   {} ({}%)\n",
            stats.completed,
            stats.completion_percent()
        ));

        let overdue = if stats.overdue > 0 {
            stats.overdue.to_string().red().to_string()
        } else {
            stats.overdue.to_string()
        };
        out.push_str(&format!("  Overdue:     {}\n", overdue));
        out
    }

    /// Success notification line.
    pub fn success(message: &str) -> String {
        format!("{} {}", "v".green(), message)
    }

    /// Error notification line.
    pub fn error(message: &str) -> String {
        format!("{} {}", "x".red(), message)
    }

    /// Deadline-aware status label, colored by urgency.
    fn status_badge(project: &Project, today: NaiveDate) -> String {
        let text = status_text(project, today);

        if is_overdue(project.deadline, project.status, today) {
            return text.red().bold().to_string();
        }
        match project.status {
            ProjectStatus::Completed => text.green().to_string(),
            ProjectStatus::InProgress => text.cyan().to_string(),
            ProjectStatus::NotStarted => text.dimmed().to_string(),
        }
    }

    fn priority_badge(priority: Priority) -> String {
        let label = format!("[{}]", priority.display_name());
        match priority {
            Priority::High => label.red().to_string(),
            Priority::Medium => label.yellow().to_string(),
            Priority::Low => label.dimmed().to_string(),
        }
    }

    /// Render a date like "Sep 1, 2026".
    fn format_date(date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use studytrack_domain::ProjectDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_card_contains_core_fields() {
        plain();
        let project = Project::create(
            ProjectDraft::new("Tides Essay", date(2026, 9, 1))
                .with_subject("Oceanography")
                .with_task("Outline"),
            Utc::now(),
        );

        let card = ConsoleFormatter::format_card(&project, date(2026, 8, 7));
        assert!(card.contains("Tides Essay"));
        assert!(card.contains("Subject: Oceanography"));
        assert!(card.contains("Tasks (0/1):"));
        assert!(card.contains("Sep 1, 2026"));
    }

    #[test]
    fn test_card_collapses_long_checklists() {
        plain();
        let mut draft = ProjectDraft::new("Big Project", date(2026, 9, 1));
        for i in 0..5 {
            draft = draft.with_task(format!("Step {}", i));
        }
        let project = Project::create(draft, Utc::now());

        let card = ConsoleFormatter::format_card(&project, date(2026, 8, 7));
        assert!(card.contains("+2 more tasks"));
    }

    #[test]
    fn test_empty_list_messages() {
        plain();
        let none: Vec<Project> = Vec::new();
        assert!(
            ConsoleFormatter::format_list(&none, date(2026, 8, 7), false)
                .contains("No projects yet")
        );
        assert!(
            ConsoleFormatter::format_list(&none, date(2026, 8, 7), true)
                .contains("match your filters")
        );
    }

    #[test]
    fn test_overdue_badge_text() {
        plain();
        let project = Project::create(
            ProjectDraft::new("Late Essay", date(2026, 8, 1)),
            Utc::now(),
        );
        let listing = ConsoleFormatter::format_list(
            std::slice::from_ref(&project),
            date(2026, 8, 7),
            false,
        );
        assert!(listing.contains("Overdue"));
    }

    #[test]
    fn test_stats_output() {
        plain();
        let stats = ProjectStats {
            total: 4,
            not_started: 1,
            in_progress: 1,
            completed: 2,
            overdue: 1,
        };
        let text = ConsoleFormatter::format_stats(&stats);
        assert!(text.contains("Total:       4"));
        assert!(text.contains("Completed:   2 (50%)"));
    }
}
