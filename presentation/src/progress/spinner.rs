//! Spinner shown while a description is generated.
//!
//! The generation itself finishes in microseconds; the spinner exists so
//! the command gives the same transient "working" feedback the form UI
//! shows, and it clears itself before the result is printed.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Transient spinner for the `describe` flow
pub struct GenerationSpinner {
    bar: Option<ProgressBar>,
}

impl GenerationSpinner {
    /// Start a ticking spinner. Pass `quiet` to suppress it entirely.
    pub fn start(quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("Generating description...");
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
