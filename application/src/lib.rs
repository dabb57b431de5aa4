//! Application layer for studytrack
//!
//! Use cases orchestrate the domain layer behind ports; infrastructure
//! supplies the adapters. Nothing here touches the filesystem or terminal
//! directly.

pub mod ports;
pub mod use_cases;

pub use ports::{InMemoryProjectRepository, ProjectRepository, RepositoryError};
pub use use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GenerateDescriptionError, GenerateDescriptionInput, GenerateDescriptionUseCase,
    QueryProjectsError, QueryProjectsUseCase, UpdateProjectError, UpdateProjectUseCase,
};
