//! Application use cases

pub mod create_project;
pub mod delete_project;
pub mod generate_description;
pub mod query_projects;
pub mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use generate_description::{
    GenerateDescriptionError, GenerateDescriptionInput, GenerateDescriptionUseCase,
};
pub use query_projects::{QueryProjectsError, QueryProjectsUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
