//! Remediation presentation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::delivery::Remediation;

/// Remediation presentation errors
#[derive(Debug, Clone, Error)]
pub enum RemediationError {
    #[error("Failed to show remediation dialog: {0}")]
    DialogFailed(String),

    #[error("Failed to open settings: {0}")]
    OpenFailed(String),
}

/// Port for offering the user a fix for a denied paste
#[async_trait]
pub trait RemediationHandler: Send + Sync {
    /// Present the remediation. Best effort: callers log failures and move on.
    async fn present(&self, remediation: &Remediation) -> Result<(), RemediationError>;
}
