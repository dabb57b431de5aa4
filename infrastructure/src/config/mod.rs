//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, OutputConfig, StoreConfig};
pub use loader::ConfigLoader;
