use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_STRINGS_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OTOOL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OTOOL_PATH: &str = "/usr/bin/otool";
const DEFAULT_STRINGS_PATH: &str = "/usr/bin/strings";
const DEFAULT_MAX_CONCURRENCY: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Runtime configuration, read from `APPDETECTIVE_*` environment variables
#[derive(Debug, Clone)]
pub struct DetectiveConfig {
    pub log_level: String,
    pub strings_timeout_secs: u64,
    pub otool_timeout_secs: u64,
    pub otool_path: PathBuf,
    pub strings_path: PathBuf,
    pub max_concurrency: usize,
    pub evidence_log: Option<PathBuf>,
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl Default for DetectiveConfig {
    fn default() -> Self {
        let log_level = env::var("APPDETECTIVE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let strings_timeout_secs =
            env_parsed("APPDETECTIVE_STRINGS_TIMEOUT").unwrap_or(DEFAULT_STRINGS_TIMEOUT_SECS);

        let otool_timeout_secs =
            env_parsed("APPDETECTIVE_OTOOL_TIMEOUT").unwrap_or(DEFAULT_OTOOL_TIMEOUT_SECS);

        let otool_path = env::var("APPDETECTIVE_OTOOL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OTOOL_PATH));

        let strings_path = env::var("APPDETECTIVE_STRINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STRINGS_PATH));

        let max_concurrency =
            env_parsed("APPDETECTIVE_MAX_CONCURRENCY").unwrap_or(DEFAULT_MAX_CONCURRENCY);

        let evidence_log = env::var("APPDETECTIVE_EVIDENCE_LOG")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            strings_timeout_secs,
            otool_timeout_secs,
            otool_path,
            strings_path,
            max_concurrency,
            evidence_log,
        }
    }
}

impl DetectiveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strings_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Strings timeout must be at least 1 second".to_string(),
            ));
        }
        if self.strings_timeout_secs > 300 {
            return Err(ConfigError::ValidationFailed(
                "Strings timeout cannot exceed 5 minutes".to_string(),
            ));
        }

        if self.otool_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Otool timeout must be at least 1 second".to_string(),
            ));
        }
        if self.otool_timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Otool timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if self.max_concurrency == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max concurrency must be at least 1".to_string(),
            ));
        }
        if self.max_concurrency > 64 {
            return Err(ConfigError::ValidationFailed(
                "Max concurrency cannot exceed 64".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn strings_timeout(&self) -> Duration {
        Duration::from_secs(self.strings_timeout_secs)
    }

    pub fn otool_timeout(&self) -> Duration {
        Duration::from_secs(self.otool_timeout_secs)
    }

    pub fn to_display_map(&self) -> std::collections::BTreeMap<String, String> {
        let mut map = std::collections::BTreeMap::new();

        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert(
            "strings_timeout_secs".to_string(),
            self.strings_timeout_secs.to_string(),
        );
        map.insert(
            "otool_timeout_secs".to_string(),
            self.otool_timeout_secs.to_string(),
        );
        map.insert(
            "otool_path".to_string(),
            self.otool_path.display().to_string(),
        );
        map.insert(
            "strings_path".to_string(),
            self.strings_path.display().to_string(),
        );
        map.insert(
            "max_concurrency".to_string(),
            self.max_concurrency.to_string(),
        );
        if let Some(ref path) = self.evidence_log {
            map.insert("evidence_log".to_string(), path.display().to_string());
        }

        map
    }
}

impl fmt::Display for DetectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AppDetective Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Strings Timeout: {}s", self.strings_timeout_secs)?;
        writeln!(f, "  Otool Timeout: {}s", self.otool_timeout_secs)?;
        writeln!(f, "  Otool: {}", self.otool_path.display())?;
        writeln!(f, "  Strings: {}", self.strings_path.display())?;
        writeln!(f, "  Max Concurrency: {}", self.max_concurrency)?;
        if let Some(ref path) = self.evidence_log {
            writeln!(f, "  Evidence Log: {}", path.display())?;
        }
        Ok(())
    }
}
