//! Tokio subprocess runner with enforced timeouts

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::application::ports::{CommandError, CommandOutput, CommandRunner};
use crate::domain::delivery::Invocation;

/// Runs programs with `tokio::process`, killing them past their timeout
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CommandError::NotFound(invocation.program.clone())
                } else {
                    CommandError::SpawnFailed {
                        program: invocation.program.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let finished = tokio::time::timeout(timeout, async {
            tokio::join!(read_pipe(stdout), read_pipe(stderr), child.wait())
        })
        .await;

        match finished {
            Ok((stdout, stderr, status)) => {
                let status = status.map_err(|e| CommandError::SpawnFailed {
                    program: invocation.program.clone(),
                    message: e.to_string(),
                })?;
                debug!(command = %invocation, code = ?status.code(), "Process exited");
                Ok(CommandOutput {
                    code: status.code(),
                    stdout,
                    stderr,
                })
            }
            Err(_) => {
                warn!(command = %invocation, timeout_ms = timeout.as_millis() as u64, "Process timed out, killing");
                if let Err(e) = child.kill().await {
                    debug!(error = %e, "Kill after timeout failed");
                }
                Err(CommandError::TimedOut {
                    program: invocation.program.clone(),
                    timeout,
                })
            }
        }
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf).await {
            debug!(error = %e, "Failed to read child output");
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
