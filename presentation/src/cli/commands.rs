//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use studytrack_domain::{Priority, PriorityFilter, ProjectStatus, SortKey, StatusFilter};

/// CLI arguments for studytrack
#[derive(Parser, Debug)]
#[command(name = "studytrack")]
#[command(author, version, about = "Personal project tracker with a description generator")]
#[command(long_about = r#"
studytrack keeps a local list of projects — title, subject, priority,
status, deadline, and a checklist — and can draft a plausible project
description from the title and subject alone.

Projects are stored in a JSON file under your platform data directory.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./studytrack.toml   Project-level config
3. ~/.config/studytrack/config.toml   Global config

Example:
  studytrack add --title "Quantum Tunneling Effects" --subject Physics \
      --deadline 2026-09-01 --describe
  studytrack list --status overdue --sort priority
  studytrack describe "Comprehensive Analysis of Photosynthesis"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Plain output: no colors, no spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Add {
        /// Project title
        #[arg(short, long)]
        title: String,

        /// Subject or course
        #[arg(short, long, default_value = "")]
        subject: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Priority level
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: PriorityArg,

        /// Initial status
        #[arg(long, value_enum, default_value = "not-started")]
        status: StatusArg,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        deadline: NaiveDate,

        /// Checklist entry (can be repeated)
        #[arg(long = "task", value_name = "TEXT")]
        tasks: Vec<String>,

        /// Generate a description from title + subject when none is given
        #[arg(long)]
        describe: bool,
    },

    /// List projects with optional filters
    List {
        /// Filter by status ("overdue" selects past-deadline, unfinished)
        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilterArg,

        /// Filter by priority
        #[arg(long, value_enum, default_value = "all")]
        priority: PriorityFilterArg,

        /// Sort order (defaults to the configured sort)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },

    /// Show the full card for one project
    Show {
        /// Project id
        id: String,
    },

    /// Edit an existing project's fields
    Edit {
        /// Project id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        subject: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long, value_enum)]
        priority: Option<PriorityArg>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        deadline: Option<NaiveDate>,
    },

    /// Change a project's status
    SetStatus {
        /// Project id
        id: String,

        /// New status
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Manage a project's checklist
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show dashboard counters
    Stats,

    /// Generate a project description without saving anything
    Describe {
        /// Project title
        title: String,

        /// Subject or course
        #[arg(short, long, default_value = "")]
        subject: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Add a checklist entry
    Add {
        /// Project id
        id: String,
        /// Entry text
        text: String,
    },

    /// Toggle a checklist entry's completion
    Toggle {
        /// Project id
        id: String,
        /// Checklist entry id
        task_id: String,
    },
}

/// Priority argument, mirrored into the domain type
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Status argument, mirrored into the domain type
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Completed,
}

impl From<StatusArg> for ProjectStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::NotStarted => ProjectStatus::NotStarted,
            StatusArg::InProgress => ProjectStatus::InProgress,
            StatusArg::Completed => ProjectStatus::Completed,
        }
    }
}

/// Status filter argument for `list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilterArg {
    All,
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

impl From<StatusFilterArg> for StatusFilter {
    fn from(arg: StatusFilterArg) -> Self {
        match arg {
            StatusFilterArg::All => StatusFilter::All,
            StatusFilterArg::Overdue => StatusFilter::Overdue,
            StatusFilterArg::NotStarted => StatusFilter::Is(ProjectStatus::NotStarted),
            StatusFilterArg::InProgress => StatusFilter::Is(ProjectStatus::InProgress),
            StatusFilterArg::Completed => StatusFilter::Is(ProjectStatus::Completed),
        }
    }
}

/// Priority filter argument for `list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityFilterArg {
    All,
    Low,
    Medium,
    High,
}

impl From<PriorityFilterArg> for PriorityFilter {
    fn from(arg: PriorityFilterArg) -> Self {
        match arg {
            PriorityFilterArg::All => PriorityFilter::All,
            PriorityFilterArg::Low => PriorityFilter::Is(Priority::Low),
            PriorityFilterArg::Medium => PriorityFilter::Is(Priority::Medium),
            PriorityFilterArg::High => PriorityFilter::Is(Priority::High),
        }
    }
}

/// Sort argument for `list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Deadline,
    Created,
    Title,
    Priority,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Deadline => SortKey::Deadline,
            SortArg::Created => SortKey::Created,
            SortArg::Title => SortKey::Title,
            SortArg::Priority => SortKey::Priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_parses() {
        let cli = Cli::parse_from([
            "studytrack",
            "add",
            "--title",
            "Tides Essay",
            "--deadline",
            "2026-09-01",
            "--task",
            "Outline",
            "--task",
            "Draft",
        ]);
        match cli.command {
            Command::Add {
                title,
                deadline,
                tasks,
                ..
            } => {
                assert_eq!(title, "Tides Essay");
                assert_eq!(deadline, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
                assert_eq!(tasks, vec!["Outline", "Draft"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_list_filter_values() {
        let cli = Cli::parse_from(["studytrack", "list", "--status", "overdue", "--sort", "title"]);
        match cli.command {
            Command::List { status, sort, .. } => {
                assert!(matches!(StatusFilter::from(status), StatusFilter::Overdue));
                assert!(matches!(sort.map(SortKey::from), Some(SortKey::Title)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_status_arg_uses_kebab_case() {
        let cli = Cli::parse_from(["studytrack", "set-status", "proj_1_0001", "in-progress"]);
        match cli.command {
            Command::SetStatus { status, .. } => {
                assert!(matches!(
                    ProjectStatus::from(status),
                    ProjectStatus::InProgress
                ));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
