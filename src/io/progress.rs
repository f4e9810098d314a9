//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for batch operations
///
/// Small batches get one line per file showing its state; larger batches add
/// a single overall bar and only the most recent files keep a line.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// (`filename`, `status`) for the rolling window display
    file_states: Vec<(String, String)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(1);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Show a file as being processed by `operation`
    pub fn start_file(&mut self, index: usize, path: &Path, operation: &str) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), String::new()));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, format!("{operation}..."));
        }
        self.update_bars();
    }

    /// Mark a file as done and advance the batch bar
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = format!("done in {:.2}s", elapsed.as_secs_f64());
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<&(String, String)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar, (name, status)) in self.file_bars.iter().zip(visible_files) {
            bar.set_prefix(name.clone());
            bar.set_message(status.clone());
        }

        // Clear any unused bars
        for bar in self.file_bars.iter().skip(visible_files.len()) {
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
