//! Presentation layer for studytrack
//!
//! Clap command definitions, console formatting, and progress feedback.
//! No business logic lives here — everything renders domain types.

pub mod cli;
pub mod output;
pub mod progress;

pub use cli::{
    Cli, Command, PriorityArg, PriorityFilterArg, SortArg, StatusArg, StatusFilterArg, TaskCommand,
};
pub use output::{ConsoleFormatter, set_color_enabled};
pub use progress::GenerationSpinner;
