//! Output formatting and progress indicators
//!
//! Utilities for displaying build progress and formatted messages to
//! the user.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::dispatch::ErrorRecord;
use crate::core::platform::Platform;

/// Create a progress bar for build units
pub fn create_build_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} builds ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Print the per-unit start line without garbling the active bar
pub fn print_unit_start(bar: &ProgressBar, platform: &Platform, package: &Path) {
    bar.suspend(|| println!("--> {:>15}: {}", platform.to_string(), package.display()));
}

/// Print every recorded failure, each naming its platform
pub fn print_failure_report(failures: &[ErrorRecord]) {
    eprintln!();
    eprintln!("{} {} build error(s) occurred:", status::ERROR, failures.len());
    for failure in failures {
        eprintln!("--> {} error: {}", failure.platform, failure.message);
    }
}

/// Display a fatal error
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
