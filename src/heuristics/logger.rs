// Evidence logging for detection stages
use serde::{Serialize, Serializer};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::stack::TechStack;

#[derive(Serialize)]
struct EvidenceEntry<'a> {
    stage: &'a str,
    #[serde(serialize_with = "serialize_path")]
    bundle: &'a Path,
    #[serde(serialize_with = "serialize_path")]
    executable: &'a Path,
    tags: &'a TechStack,
    latency_ms: u64,
    timestamp: u64,
}

fn serialize_path<S>(value: &&Path, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string_lossy())
}

/// Appends one JSON line per detection stage to a log file
pub struct EvidenceLogger {
    writer: Option<Arc<Mutex<BufWriter<File>>>>,
    enabled: bool,
}

impl EvidenceLogger {
    pub fn new(log_file: Option<PathBuf>) -> Self {
        let writer = log_file.and_then(|path| {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => Some(Arc::new(Mutex::new(BufWriter::new(file)))),
                Err(e) => {
                    warn!("Failed to open evidence log file {:?}: {}", path, e);
                    None
                }
            }
        });

        Self {
            enabled: writer.is_some(),
            writer,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            writer: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log_stage(
        &self,
        stage: &str,
        bundle: &Path,
        executable: &Path,
        tags: &TechStack,
        latency_ms: u64,
    ) {
        if !self.enabled {
            return;
        }

        let entry = EvidenceEntry {
            stage,
            bundle,
            executable,
            tags,
            latency_ms,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        };

        if let Some(writer) = &self.writer {
            if let Ok(mut writer) = writer.lock() {
                match serde_json::to_string(&entry) {
                    Ok(json) => {
                        if let Err(e) = writeln!(writer, "{}", json) {
                            warn!("Failed to write evidence log entry: {}", e);
                        }
                        if let Err(e) = writer.flush() {
                            warn!("Failed to flush evidence log: {}", e);
                        }
                    }
                    Err(e) => {
                        warn!("Failed to serialize evidence for stage {}: {}", stage, e);
                    }
                }
            }
        }

        debug!("Evidence log: stage={} tags={} latency_ms={}", stage, tags, latency_ms);
    }
}
