//! Subprocess port interface

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::delivery::Invocation;

/// Subprocess errors
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Failed to spawn {program}: {message}")]
    SpawnFailed { program: String, message: String },

    #[error("{program} timed out after {}ms and was killed", .timeout.as_millis())]
    TimedOut { program: String, timeout: Duration },
}

/// Result of a process that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program to completion or until `timeout` elapses.
    ///
    /// Implementations must kill the child when the timeout fires, and must
    /// not leave a timer running once the child exits.
    async fn run(
        &self,
        invocation: &Invocation,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for Arc<T> {
    async fn run(
        &self,
        invocation: &Invocation,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        self.as_ref().run(invocation, timeout).await
    }
}
