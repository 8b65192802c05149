//! Progress bars for runner completions.

use indicatif::{ProgressBar, ProgressStyle};

use crate::runner::ConcurrencyModel;

/// Create a progress bar sized to `units`, hidden unless `visible` is set.
///
/// Bars draw to stderr so stdout only carries the elapsed-time lines.
pub fn create_progress_bar(model: ConcurrencyModel, units: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(units as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("hardcoded template is valid")
            .progress_chars("#>-"),
    );
    pb.set_message(format!("{} completed", model.key()));
    pb
}
