//! Input-simulation permission gate (macOS)

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::delivery::{Invocation, Remediation};
use crate::domain::session::Platform;

use super::cache::TtlCache;
use super::ports::{Clock, CommandRunner};

/// Script that only succeeds when System Events may be driven
pub const PERMISSION_PROBE_SCRIPT: &str =
    r#"tell application "System Events" to get name of first process"#;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Outcome of a permission check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    pub granted: bool,
    /// Set only when a fresh probe found the permission denied
    pub remediation: Option<Remediation>,
}

impl PermissionCheck {
    const fn granted() -> Self {
        Self {
            granted: true,
            remediation: None,
        }
    }
}

/// Probes and memoizes the Accessibility permission.
///
/// Other platforms need no grant and always pass.
pub struct PermissionGate {
    runner: Arc<dyn CommandRunner>,
    cache: TtlCache<(), bool>,
    platform: Platform,
}

impl PermissionGate {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        platform: Platform,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            runner,
            cache: TtlCache::new(ttl, clock),
            platform,
        }
    }

    /// Last probed state, `None` before the first probe or after expiry
    pub fn cached(&self) -> Option<bool> {
        self.cache.get(&())
    }

    /// Check the permission, probing when the cached answer has expired
    pub async fn check(&self) -> PermissionCheck {
        if self.platform != Platform::MacOs {
            return PermissionCheck::granted();
        }

        if let Some(granted) = self.cached() {
            debug!(granted, "Permission cache hit");
            return PermissionCheck {
                granted,
                remediation: None,
            };
        }

        let probe = Invocation::new("osascript", ["-e", PERMISSION_PROBE_SCRIPT]);
        let granted = match self.runner.run(&probe, PROBE_TIMEOUT).await {
            Ok(output) => output.success(),
            Err(e) => {
                warn!(error = %e, "Permission probe failed");
                false
            }
        };
        self.cache.insert((), granted);

        if granted {
            debug!("Accessibility permission granted");
            PermissionCheck::granted()
        } else {
            warn!("Accessibility permission denied");
            PermissionCheck {
                granted: false,
                remediation: Some(Remediation::GrantAccessibility),
            }
        }
    }
}
