use super::{process::run_with_timeout, StringExtractor, ToolError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Extracts printable strings with `strings -a`
pub struct StringsExtractor {
    program: PathBuf,
}

impl StringsExtractor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl StringExtractor for StringsExtractor {
    async fn extract(&self, executable: &Path, timeout: Duration) -> Result<String, ToolError> {
        let stdout = run_with_timeout(
            &self.program,
            [Path::new("-a").as_os_str(), executable.as_os_str()],
            timeout,
        )
        .await?;

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}
