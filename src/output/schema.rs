//! Serializable detection report
//!
//! One [`DetectionReport`] per bundle. The `outcome` field is tagged by
//! `status`, so a classified bundle reads
//! `{"status": "classified", "stack": ["electron"]}` and an unresolvable one
//! `{"status": "undetermined"}`.

use crate::bundle::ExecutableDescriptor;
use crate::pipeline::{Detection, Evidence, Outcome};
use crate::stack::{Category, TechStack};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeReport {
    Classified { stack: TechStack },
    Undetermined,
}

impl From<&Outcome> for OutcomeReport {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Classified(stack) => OutcomeReport::Classified {
                stack: stack.clone(),
            },
            Outcome::Undetermined => OutcomeReport::Undetermined,
        }
    }
}

impl From<&OutcomeReport> for Outcome {
    fn from(report: &OutcomeReport) -> Self {
        match report {
            OutcomeReport::Classified { stack } => Outcome::Classified(stack.clone()),
            OutcomeReport::Undetermined => Outcome::Undetermined,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Display name from Info.plist, or the bundle's file stem
    pub bundle_name: String,
    pub bundle_path: PathBuf,
    pub resolved_path: PathBuf,
    pub is_wrapped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub executable: Option<ExecutableDescriptor>,
    pub outcome: OutcomeReport,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub evidence: Evidence,
    pub detected_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl From<&Detection> for DetectionReport {
    fn from(detection: &Detection) -> Self {
        Self {
            bundle_name: detection
                .metadata
                .name
                .clone()
                .unwrap_or_else(|| detection.bundle.display_name()),
            bundle_path: detection.bundle.requested_path.clone(),
            resolved_path: detection.bundle.resolved_path.clone(),
            is_wrapped: detection.bundle.is_wrapped,
            bundle_identifier: detection.metadata.identifier.clone(),
            version: detection.metadata.version.clone(),
            executable: detection.executable.clone(),
            outcome: OutcomeReport::from(&detection.outcome),
            category: detection.category,
            evidence: detection.evidence.clone(),
            detected_at: Utc::now(),
            duration_ms: detection.duration.as_millis() as u64,
        }
    }
}

impl DetectionReport {
    pub fn outcome(&self) -> Outcome {
        Outcome::from(&self.outcome)
    }

    pub fn is_classified(&self) -> bool {
        matches!(self.outcome, OutcomeReport::Classified { .. })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize report to YAML")
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.bundle_name)?;
        match &self.outcome {
            OutcomeReport::Classified { stack } => write!(f, "{}", stack)?,
            OutcomeReport::Undetermined => write!(f, "undetermined")?,
        }
        write!(f, " ({})", self.category)
    }
}
