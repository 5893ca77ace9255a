pub mod icons;
pub mod progress;

pub use progress::ProgressRenderer;

use clap::ValueEnum;

/// Terminal output mode for the submission progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UiMode {
    /// Live progress bar and styled final summary.
    Full,
    /// No live rendering; the final outcome is printed as JSON.
    Json,
}
