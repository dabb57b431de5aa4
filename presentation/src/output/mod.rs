//! Console output formatting

pub mod console;

pub use console::{ConsoleFormatter, set_color_enabled};
