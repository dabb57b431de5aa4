//! CLI entrypoint for studytrack
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use studytrack_application::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectUseCase, GenerateDescriptionInput,
    GenerateDescriptionUseCase, QueryProjectsUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use studytrack_domain::{
    ChecklistTaskId, PriorityFilter, ProjectChanges, ProjectDraft, ProjectId, ProjectQuery,
    SortKey, StatusFilter, ValidationIssue,
};
use studytrack_infrastructure::{ConfigLoader, JsonProjectStore};
use studytrack_presentation::{
    Cli, Command, ConsoleFormatter, GenerationSpinner, TaskCommand, set_color_enabled,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Could not load configuration: {}", e))?
    };

    set_color_enabled(config.output.color && !cli.quiet);

    // === Dependency Injection ===
    let store_path = config
        .store
        .path
        .clone()
        .or_else(JsonProjectStore::default_path)
        .context("Could not determine a data directory for the project store")?;
    info!("Using project store at {}", store_path.display());
    let store = Arc::new(JsonProjectStore::new(&store_path));

    let today = Local::now().date_naive();
    let default_sort: SortKey = config
        .output
        .default_sort
        .parse()
        .map_err(|e| anyhow::anyhow!("Bad default_sort in config: {}", e))?;

    match cli.command {
        Command::Add {
            title,
            subject,
            description,
            priority,
            status,
            deadline,
            tasks,
            describe,
        } => {
            let mut draft = ProjectDraft::new(title, deadline)
                .with_subject(subject)
                .with_description(description)
                .with_priority(priority.into())
                .with_status(status.into());
            for task in tasks {
                draft = draft.with_task(task);
            }

            if describe && draft.description.is_empty() {
                draft.description = generate(&draft.title, &draft.subject, cli.quiet)?;
            }

            let use_case = CreateProjectUseCase::new(store);
            match use_case.execute(draft).await {
                Ok(project) => {
                    println!("{}", ConsoleFormatter::success("Project created!"));
                    print!("{}", ConsoleFormatter::format_card(&project, today));
                }
                Err(CreateProjectError::Validation { issues }) => {
                    report_issues(&issues);
                    bail!("Project not saved");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::List {
            status,
            priority,
            sort,
        } => {
            let query = ProjectQuery::new()
                .with_status(status.into())
                .with_priority(priority.into())
                .with_sort(sort.map(SortKey::from).unwrap_or(default_sort));
            let filtered = !matches!(query.status, StatusFilter::All)
                || !matches!(query.priority, PriorityFilter::All);

            let use_case = QueryProjectsUseCase::new(store);
            let projects = use_case.list(query, today).await?;
            print!("{}", ConsoleFormatter::format_list(&projects, today, filtered));
            if !projects.is_empty() {
                println!();
            }
        }

        Command::Show { id } => {
            let use_case = QueryProjectsUseCase::new(store);
            let project = use_case.get(&ProjectId::new(id)).await?;
            print!("{}", ConsoleFormatter::format_card(&project, today));
        }

        Command::Edit {
            id,
            title,
            subject,
            description,
            priority,
            status,
            deadline,
        } => {
            let changes = ProjectChanges {
                title,
                subject,
                description,
                priority: priority.map(Into::into),
                status: status.map(Into::into),
                deadline,
            };
            if changes.is_empty() {
                bail!("Nothing to change — pass at least one field option");
            }

            let use_case = UpdateProjectUseCase::new(store);
            match use_case.execute(&ProjectId::new(id), changes).await {
                Ok(project) => {
                    println!("{}", ConsoleFormatter::success("Project updated!"));
                    print!("{}", ConsoleFormatter::format_card(&project, today));
                }
                Err(UpdateProjectError::Validation { issues }) => {
                    report_issues(&issues);
                    bail!("Project not updated");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::SetStatus { id, status } => {
            let use_case = UpdateProjectUseCase::new(store);
            let project = use_case
                .set_status(&ProjectId::new(id), status.into())
                .await?;
            println!(
                "{}",
                ConsoleFormatter::success(&format!(
                    "\"{}\" is now {}",
                    project.title, project.status
                ))
            );
        }

        Command::Task { action } => {
            let use_case = UpdateProjectUseCase::new(store);
            match action {
                TaskCommand::Add { id, text } => {
                    let project = use_case.add_task(&ProjectId::new(id), text).await?;
                    println!("{}", ConsoleFormatter::success("Task added"));
                    print!("{}", ConsoleFormatter::format_card(&project, today));
                }
                TaskCommand::Toggle { id, task_id } => {
                    let project = use_case
                        .toggle_task(&ProjectId::new(id), &ChecklistTaskId::new(task_id))
                        .await?;
                    let (completed, total) = project.task_progress();
                    println!(
                        "{}",
                        ConsoleFormatter::success(&format!("Tasks: {}/{}", completed, total))
                    );
                }
            }
        }

        Command::Delete { id, yes } => {
            let id = ProjectId::new(id);
            let query = QueryProjectsUseCase::new(store.clone());
            let project = query.get(&id).await?;

            if !yes && !confirm(&format!("Delete \"{}\"?", project.title))? {
                println!("Cancelled.");
                return Ok(());
            }

            let use_case = DeleteProjectUseCase::new(store);
            let deleted = use_case.execute(&id).await?;
            println!(
                "{}",
                ConsoleFormatter::success(&format!("Deleted \"{}\"", deleted.title))
            );
        }

        Command::Stats => {
            let use_case = QueryProjectsUseCase::new(store);
            let stats = use_case.stats(today).await?;
            print!("{}", ConsoleFormatter::format_stats(&stats));
        }

        Command::Describe { title, subject } => {
            let description = generate(&title, &subject, cli.quiet)?;
            println!("{}", description);
        }
    }

    Ok(())
}

/// Run the description generator behind a spinner.
fn generate(title: &str, subject: &str, quiet: bool) -> Result<String> {
    let spinner = GenerationSpinner::start(quiet);
    let result = GenerateDescriptionUseCase::new()
        .execute(GenerateDescriptionInput::new(title, subject));
    spinner.finish();
    Ok(result?)
}

fn report_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        eprintln!("{}", ConsoleFormatter::error(&issue.to_string()));
    }
}

/// Ask a yes/no question on stdout, defaulting to no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} This cannot be undone. [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
