//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Project title must not be empty")]
    EmptyTitle,

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid status filter: {0}")]
    InvalidStatusFilter(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),
}
