use super::ToolError;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::trace;

/// Run a program to completion and return its stdout.
///
/// The child is spawned with `kill_on_drop`, so when the timeout fires the
/// pending wait is dropped and the process is killed and reaped by the runtime.
pub async fn run_with_timeout<I, S>(
    program: &Path,
    args: I,
    timeout: Duration,
) -> Result<Vec<u8>, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let name = program.display().to_string();

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ToolError::Spawn {
            program: name.clone(),
            source,
        })?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(|source| ToolError::Io {
            program: name.clone(),
            source,
        })?,
        Err(_) => {
            return Err(ToolError::Timeout {
                program: name,
                timeout,
            })
        }
    };

    if !output.status.success() {
        return Err(ToolError::Failed {
            program: name,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    trace!(program = %name, bytes = output.stdout.len(), "Tool finished");
    Ok(output.stdout)
}
