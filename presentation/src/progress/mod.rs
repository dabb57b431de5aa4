//! Progress feedback

pub mod spinner;

pub use spinner::GenerationSpinner;
