//! Delivery execution: try each candidate until one succeeds

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::delivery::{DeliveryCandidate, Mechanism};

use super::error::PasteError;
use super::ports::{CommandError, CommandRunner};

/// A successful delivery
#[derive(Debug, Clone)]
pub struct Delivered {
    pub mechanism: Mechanism,
    /// How long to wait before restoring the clipboard
    pub restore_delay: Duration,
    /// Failures of the mechanisms tried before this one
    pub failures: Vec<PasteError>,
}

/// Runs delivery candidates in order.
///
/// A failed candidate hands over to its escalation when it declares one,
/// otherwise to the next entry of the list. Timeouts kill the child before
/// moving on.
pub struct DeliveryExecutor {
    runner: Arc<dyn CommandRunner>,
}

impl DeliveryExecutor {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Execute candidates until one exits 0.
    ///
    /// # Returns
    /// The delivering mechanism, or every failure in attempt order
    pub async fn execute(
        &self,
        candidates: &[DeliveryCandidate],
    ) -> Result<Delivered, Vec<PasteError>> {
        let mut failures = Vec::new();

        for candidate in candidates {
            let mut current = Some(candidate);
            while let Some(attempt) = current {
                match self.attempt(attempt).await {
                    Ok(()) => {
                        info!(mechanism = %attempt.mechanism, "Paste delivered");
                        return Ok(Delivered {
                            mechanism: attempt.mechanism,
                            restore_delay: attempt.restore_delay,
                            failures,
                        });
                    }
                    Err(e) => {
                        warn!(mechanism = %attempt.mechanism, error = %e, "Paste mechanism failed");
                        failures.push(e);
                        current = attempt.escalation.as_deref();
                        if let Some(next) = current {
                            debug!(from = %attempt.mechanism, to = %next.mechanism, "Escalating");
                        }
                    }
                }
            }
        }

        Err(failures)
    }

    async fn attempt(&self, candidate: &DeliveryCandidate) -> Result<(), PasteError> {
        if !candidate.pre_delay.is_zero() {
            tokio::time::sleep(candidate.pre_delay).await;
        }

        debug!(
            mechanism = %candidate.mechanism,
            command = %candidate.invocation,
            timeout_ms = candidate.timeout.as_millis() as u64,
            "Attempting paste"
        );

        let mechanism = candidate.mechanism;
        match self
            .runner
            .run(&candidate.invocation, candidate.timeout)
            .await
        {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => Err(PasteError::MechanismExitFailure {
                mechanism,
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            }),
            Err(CommandError::TimedOut { timeout, .. }) => {
                Err(PasteError::MechanismTimeout { mechanism, timeout })
            }
            Err(e) => Err(PasteError::MechanismSpawnFailed {
                mechanism,
                message: e.to_string(),
            }),
        }
    }
}
