//! Output formatting for multiple formats
//!
//! JSON and YAML emit [`DetectionReport`]s as-is: a single object for one
//! bundle, a list otherwise. The human format renders one block per bundle.

use anyhow::{Context, Result};

use crate::config::DetectiveConfig;
use crate::output::{DetectionReport, OutcomeReport};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for detection reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats one or more reports according to the configured format
    pub fn format_reports(&self, reports: &[DetectionReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(reports),
            OutputFormat::Yaml => self.format_yaml(reports),
            OutputFormat::Human => Ok(self.format_human(reports)),
        }
    }

    /// Formats configuration display
    pub fn format_config(&self, config: &DetectiveConfig) -> Result<String> {
        let config_map = config.to_display_map();
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&config_map)
                .context("Failed to serialize config to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&config_map).context("Failed to serialize config to YAML")
            }
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    fn format_json(&self, reports: &[DetectionReport]) -> Result<String> {
        match reports {
            [single] => single.to_json(),
            many => serde_json::to_string_pretty(many)
                .context("Failed to serialize reports to JSON"),
        }
    }

    fn format_yaml(&self, reports: &[DetectionReport]) -> Result<String> {
        match reports {
            [single] => single.to_yaml(),
            many => serde_yaml::to_string(many).context("Failed to serialize reports to YAML"),
        }
    }

    fn format_human(&self, reports: &[DetectionReport]) -> String {
        let mut output = String::new();

        for report in reports {
            output.push_str(&Self::format_human_report(report));
            output.push('\n');
        }

        if reports.len() > 1 {
            let undetermined = reports.iter().filter(|r| !r.is_classified()).count();
            output.push_str(&format!(
                "{} bundle(s) scanned, {} undetermined\n",
                reports.len(),
                undetermined
            ));
        }

        output
    }

    fn format_human_report(report: &DetectionReport) -> String {
        let mut output = String::new();

        match &report.outcome {
            OutcomeReport::Classified { .. } => {
                output.push_str(&format!("\u{2713} {}\n", report.bundle_name));
            }
            OutcomeReport::Undetermined => {
                output.push_str(&format!("\u{26A0} {} (undetermined)\n", report.bundle_name));
            }
        }
        output.push_str(RULE);
        output.push('\n');

        output.push_str(&format!("Path:        {}\n", report.bundle_path.display()));
        if report.is_wrapped {
            output.push_str(&format!(
                "Wrapped:     {}\n",
                report.resolved_path.display()
            ));
        }
        if let Some(identifier) = &report.bundle_identifier {
            output.push_str(&format!("Identifier:  {}\n", identifier));
        }
        if let Some(version) = &report.version {
            output.push_str(&format!("Version:     {}\n", version));
        }
        match &report.executable {
            Some(exe) if exe.from_fallback => {
                output.push_str(&format!("Executable:  {} (fallback)\n", exe.name));
            }
            Some(exe) => output.push_str(&format!("Executable:  {}\n", exe.name)),
            None => output.push_str("Executable:  (not found)\n"),
        }
        output.push_str(&format!("Category:    {}\n", report.category));

        if let OutcomeReport::Classified { stack } = &report.outcome {
            output.push_str("\nTechnologies:\n");
            let count = stack.len();
            for (i, technology) in stack.iter().enumerate() {
                let connector = if i + 1 == count { "\u{2514}" } else { "\u{251C}" };
                output.push_str(&format!("{}\u{2500} {}\n", connector, technology));
            }
        }

        output.push_str(&format!("\nCompleted in {}ms\n", report.duration_ms));
        output
    }
}
