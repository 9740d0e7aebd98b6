//! Batch progress display for layout processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Layouts: [{{bar:{width}.cyan/blue}}] {{pos}}/{{len}} {{msg}}",
        width = PROGRESS_BAR_WIDTH
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per processed layout
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress bar, sized by [`ProgressManager::initialize`]
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Set the number of layouts to process
    pub fn initialize(&self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Show the layout currently being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark a layout as done
    pub fn complete_file(&self, path: &Path, elapsed: Duration) {
        self.bar.inc(1);
        self.bar.set_message(format!(
            "✓ {} ({} ms)",
            path.file_name().unwrap_or_default().to_string_lossy(),
            elapsed.as_millis()
        ));
    }

    /// Number of layouts completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All layouts processed");
    }
}
