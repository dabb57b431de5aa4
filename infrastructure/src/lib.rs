//! Infrastructure layer for studytrack
//!
//! Concrete adapters for the application ports: the JSON file project
//! store and figment-based configuration loading.

pub mod config;
pub mod store;

pub use config::{ConfigLoader, FileConfig};
pub use store::JsonProjectStore;
