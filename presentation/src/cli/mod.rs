//! CLI argument definitions

pub mod commands;

pub use commands::{
    Cli, Command, PriorityArg, PriorityFilterArg, SortArg, StatusArg, StatusFilterArg, TaskCommand,
};
