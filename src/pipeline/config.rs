use crate::config::DetectiveConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub strings_timeout: Duration,
    pub otool_timeout: Duration,
    pub otool_path: PathBuf,
    pub strings_path: PathBuf,
    pub max_concurrency: usize,
    pub evidence_log: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strings_timeout: Duration::from_secs(10),
            otool_timeout: Duration::from_secs(30),
            otool_path: PathBuf::from("/usr/bin/otool"),
            strings_path: PathBuf::from("/usr/bin/strings"),
            max_concurrency: 4,
            evidence_log: None,
        }
    }
}

impl From<&DetectiveConfig> for PipelineConfig {
    fn from(config: &DetectiveConfig) -> Self {
        Self {
            strings_timeout: config.strings_timeout(),
            otool_timeout: config.otool_timeout(),
            otool_path: config.otool_path.clone(),
            strings_path: config.strings_path.clone(),
            max_concurrency: config.max_concurrency,
            evidence_log: config.evidence_log.clone(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strings_timeout(mut self, timeout: Duration) -> Self {
        self.strings_timeout = timeout;
        self
    }

    pub fn with_otool_timeout(mut self, timeout: Duration) -> Self {
        self.otool_timeout = timeout;
        self
    }

    pub fn with_otool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.otool_path = path.into();
        self
    }

    pub fn with_strings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.strings_path = path.into();
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_evidence_log(mut self, path: Option<PathBuf>) -> Self {
        self.evidence_log = path;
        self
    }
}
