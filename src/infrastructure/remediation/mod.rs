//! Remediation presentation adapters

mod log;
mod osascript;

pub use self::log::LogRemediation;
pub use self::osascript::OsascriptRemediation;

use std::sync::Arc;

use crate::application::ports::{CommandRunner, RemediationHandler};
use crate::domain::session::Platform;

/// Create the remediation handler for the platform
pub fn create_remediation_handler(
    platform: Platform,
    runner: Arc<dyn CommandRunner>,
) -> Box<dyn RemediationHandler> {
    match platform {
        Platform::MacOs => Box::new(OsascriptRemediation::new(runner)),
        Platform::Windows | Platform::Linux => Box::new(LogRemediation),
    }
}
