use std::time::Duration;
use thiserror::Error;

/// Failure of an external inspection tool.
///
/// Detection never surfaces these: every stage that calls a tool treats a
/// failure as "no evidence".
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} did not finish within {}s", timeout.as_secs_f64())]
    Timeout { program: String, timeout: Duration },

    #[error("{program} exited with {}: {stderr}", status.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()))]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Failed to collect output of {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} produced output that is not valid UTF-8")]
    InvalidOutput { program: String },
}

impl ToolError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ToolError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ToolError::Timeout {
            program: "strings".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(err.to_string(), "strings did not finish within 10s");
        assert!(err.is_timeout());

        let err = ToolError::Failed {
            program: "otool".to_string(),
            status: Some(1),
            stderr: "not an object file".to_string(),
        };
        assert_eq!(err.to_string(), "otool exited with 1: not an object file");
        assert!(!err.is_timeout());
    }
}
