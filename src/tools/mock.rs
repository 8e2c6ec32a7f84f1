use super::{LinkedLibraryLister, StringExtractor, ToolError};
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Behavior {
    Output(String),
    Fail,
    Hang,
}

impl Behavior {
    fn failure(program: &str) -> ToolError {
        ToolError::Failed {
            program: program.to_string(),
            status: Some(1),
            stderr: "mock failure".to_string(),
        }
    }
}

/// Canned linked-library lister
pub struct MockLister {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockLister {
    pub fn returning(output: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Output(output.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkedLibraryLister for MockLister {
    async fn list(&self, _executable: &Path) -> Result<String, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Output(text) => Ok(text.clone()),
            Behavior::Fail | Behavior::Hang => Err(Behavior::failure("otool")),
        }
    }
}

/// Canned string extractor
pub struct MockStringExtractor {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockStringExtractor {
    pub fn returning(output: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Output(output.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Never produces output; reports a timeout once the deadline passes
    pub fn hanging() -> Self {
        Self {
            behavior: Behavior::Hang,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StringExtractor for MockStringExtractor {
    async fn extract(&self, _executable: &Path, timeout: Duration) -> Result<String, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Output(text) => Ok(text.clone()),
            Behavior::Fail => Err(Behavior::failure("strings")),
            Behavior::Hang => {
                tokio::time::sleep(timeout).await;
                Err(ToolError::Timeout {
                    program: "strings".to_string(),
                    timeout,
                })
            }
        }
    }
}
