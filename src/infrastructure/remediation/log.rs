//! Remediation handler that only logs

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::{RemediationError, RemediationHandler};
use crate::domain::delivery::Remediation;

/// Logs the remediation for platforms without a settings deep link
pub struct LogRemediation;

#[async_trait]
impl RemediationHandler for LogRemediation {
    async fn present(&self, remediation: &Remediation) -> Result<(), RemediationError> {
        warn!(
            title = remediation.title(),
            settings = remediation.settings_url(),
            "{}",
            remediation.message()
        );
        Ok(())
    }
}
