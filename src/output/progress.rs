use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Per-file progress display for a lint run.
///
/// Renders to stderr so report output on stdout stays clean. Hidden in quiet
/// mode or when stderr is not a TTY. Clones share one position counter, so a
/// handle can be passed into parallel workers.
#[derive(Clone)]
pub struct LintProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl LintProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    /// Split out from [`LintProgress::new`] so tests can force the styled
    /// path without a terminal.
    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let style = ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Linting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)",
                )
                .expect("template is a compile-time constant")
                .progress_chars("█▓░");
            let pb = ProgressBar::new(total);
            pb.set_style(style);
            pb
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advances the shared position by one. Safe to call from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    /// Clears the bar from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
