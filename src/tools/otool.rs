use super::{process::run_with_timeout, LinkedLibraryLister, ToolError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Lists linked libraries with `otool -L`
pub struct OtoolLister {
    program: PathBuf,
    timeout: Duration,
}

impl OtoolLister {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

#[async_trait]
impl LinkedLibraryLister for OtoolLister {
    async fn list(&self, executable: &Path) -> Result<String, ToolError> {
        let stdout = run_with_timeout(
            &self.program,
            [Path::new("-L").as_os_str(), executable.as_os_str()],
            self.timeout,
        )
        .await?;

        String::from_utf8(stdout).map_err(|_| ToolError::InvalidOutput {
            program: self.program.display().to_string(),
        })
    }
}
