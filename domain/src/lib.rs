//! Domain layer for studytrack
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Projects
//!
//! A [`Project`] is a tracked piece of work with a title, subject, priority,
//! status, deadline, and an embedded checklist. Validation, deadline
//! arithmetic, filtering/sorting, and stats aggregation all live here as
//! pure functions.
//!
//! ## Description generator
//!
//! The [`generator`] module synthesizes a plausible project description from
//! a title and subject: keyword heuristics classify the title, a weighted
//! vocabulary vote picks an academic domain, and a per-domain template
//! composes the prose. Deterministic, no I/O.

pub mod core;
pub mod generator;
pub mod project;

// Re-export commonly used types
pub use core::error::DomainError;
pub use generator::{
    AcademicDomain, Focus, Methodology, ProjectType, Scope, TitleAnalysis, generate_description,
    infer_domain,
};
pub use project::{
    ChecklistTask, ChecklistTaskId, Priority, PriorityFilter, Project, ProjectChanges,
    ProjectDraft, ProjectId, ProjectQuery, ProjectStats, ProjectStatus, SortKey, StatusFilter,
    ValidationIssue, ValidationIssueCode, days_until, is_overdue, status_text, validate_draft,
    validate_fields,
};
