//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

/// Events emitted while a folder of bundles is scanned
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Scan started
    Started { root: PathBuf, total: usize },

    /// One bundle finished, in completion order
    BundleComplete {
        bundle: PathBuf,
        index: usize,
        total: usize,
        classified: bool,
        duration: Duration,
    },

    /// Every bundle finished
    Completed {
        total: usize,
        undetermined: usize,
        total_time: Duration,
    },
}

/// Trait for handling progress events during a scan
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_progress(&ProgressEvent::Started {
            root: PathBuf::from("/Applications"),
            total: 0,
        });
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            root: PathBuf::from("/Applications"),
            total: 1,
        });
        handler.on_progress(&ProgressEvent::BundleComplete {
            bundle: PathBuf::from("/Applications/Foo.app"),
            index: 1,
            total: 1,
            classified: true,
            duration: Duration::from_millis(50),
        });
        handler.on_progress(&ProgressEvent::Completed {
            total: 1,
            undetermined: 0,
            total_time: Duration::from_secs(1),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::Started {
            root: PathBuf::from("/Applications"),
            total: 7,
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("Started"));
        assert!(debug_str.contains("total: 7"));
    }
}
