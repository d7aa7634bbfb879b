use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Spinner for one file. Key derivation dominates the run time and reports
/// no progress of its own, so a spinner is all there is to show.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[must_use]
    pub fn new(group: &MultiProgress, description: &str) -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})").unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = group.add(ProgressBar::new_spinner());
        bar.set_style(style);
        bar.set_message(description.to_owned());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
