//! Terminal rendering of a registration attempt, via `indicatif`.
//!
//! The renderer is a pure consumer of `ProgressState` snapshots: the
//! coordinator is the sole writer of progress, and nothing here infers a
//! percentage or status on its own.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::progress::{FinalResult, ProgressState, StepStatus};
use crate::ui::icons::{CHECK, CROSS, LINK, SPARKLE, USER};

/// One bar from 0 to 100 plus the rotating status message.
pub struct ProgressRenderer {
    bar: ProgressBar,
}

impl ProgressRenderer {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold.dim} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
                .expect("progress bar template is a valid static string")
                .progress_chars("█▓▒░"),
        );
        bar.set_prefix("Registro");
        Self { bar }
    }

    /// Apply one snapshot to the bar. Terminal snapshots finish or abandon
    /// the bar; everything after that is a no-op by the observer contract.
    pub fn render(&self, progress: &ProgressState) {
        let Some(step) = progress.steps.first() else {
            return;
        };
        if let Some(pct) = step.percentage {
            self.bar.set_position(u64::from(pct));
        }
        let message = step.message.clone().unwrap_or_default();
        match step.status {
            StepStatus::Completed => {
                self.bar.finish_with_message(format!("{}{}", CHECK, style(message).green()));
            }
            StepStatus::Error => {
                self.bar.abandon_with_message(format!("{}{}", CROSS, style(message).red().bold()));
            }
            StepStatus::Pending | StepStatus::InProgress => {
                self.bar.set_message(message);
            }
        }
    }

    /// Print the access details after a successful registration.
    pub fn print_final_result(&self, result: &FinalResult) {
        println!();
        println!("{}{}", SPARKLE, style(&result.message).green().bold());
        println!("  {}{} {}", LINK, style("Acceso:").dim(), style(&result.access_link).cyan());
        println!("  {}{} {}", USER, style("Usuario:").dim(), style(&result.username).cyan().bold());
        println!();
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new()
    }
}
