//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { root, total } => {
                info!(root = %root.display(), bundles = total, "Starting scan");
            }
            ProgressEvent::BundleComplete {
                bundle,
                index,
                total,
                classified,
                duration,
            } => {
                if *classified {
                    info!(
                        bundle = %bundle.display(),
                        index,
                        total,
                        duration_ms = duration.as_millis() as u64,
                        "Bundle classified"
                    );
                } else {
                    warn!(
                        bundle = %bundle.display(),
                        index,
                        total,
                        "Bundle undetermined"
                    );
                }
            }
            ProgressEvent::Completed {
                total,
                undetermined,
                total_time,
            } => {
                info!(
                    bundles = total,
                    undetermined,
                    total_time_ms = total_time.as_millis() as u64,
                    "Scan complete"
                );
            }
        }
    }
}
