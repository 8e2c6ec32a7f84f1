//! Terminal progress bar for folder scans

use super::{ProgressEvent, ProgressHandler};
use indicatif::{ProgressBar, ProgressStyle};

/// Draws an `indicatif` bar on stderr as bundles complete
pub struct BarHandler {
    bar: ProgressBar,
}

impl BarHandler {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for BarHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressHandler for BarHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { total, .. } => {
                self.bar.set_length(*total as u64);
            }
            ProgressEvent::BundleComplete { bundle, .. } => {
                let name = bundle
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.bar.set_message(name);
                self.bar.inc(1);
            }
            ProgressEvent::Completed { .. } => {
                self.bar.finish_and_clear();
            }
        }
    }
}
