//! macOS remediation dialog through osascript

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::application::ports::{CommandRunner, RemediationError, RemediationHandler};
use crate::domain::delivery::{Invocation, Remediation};

const OPEN_BUTTON: &str = "Open Settings";
const LATER_BUTTON: &str = "Later";

/// Seconds before the dialog dismisses itself
const DIALOG_GIVE_UP_SECS: u64 = 60;

/// Shows a dialog offering to open System Settings
pub struct OsascriptRemediation {
    runner: Arc<dyn CommandRunner>,
}

impl OsascriptRemediation {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn dialog_script(remediation: &Remediation) -> String {
        format!(
            r#"display dialog "{}" with title "{}" buttons {{"{}", "{}"}} default button "{}" with icon caution giving up after {}"#,
            escape(remediation.message()),
            escape(remediation.title()),
            LATER_BUTTON,
            OPEN_BUTTON,
            OPEN_BUTTON,
            DIALOG_GIVE_UP_SECS
        )
    }
}

#[async_trait]
impl RemediationHandler for OsascriptRemediation {
    async fn present(&self, remediation: &Remediation) -> Result<(), RemediationError> {
        let dialog = Invocation::new("osascript", ["-e".to_string(), Self::dialog_script(remediation)]);
        let output = self
            .runner
            .run(&dialog, Duration::from_secs(DIALOG_GIVE_UP_SECS + 5))
            .await
            .map_err(|e| RemediationError::DialogFailed(e.to_string()))?;

        if !output.stdout.contains(OPEN_BUTTON) {
            debug!("Remediation dialog dismissed");
            return Ok(());
        }

        let open = Invocation::new("open", [remediation.settings_url()]);
        let output = self
            .runner
            .run(&open, Duration::from_secs(5))
            .await
            .map_err(|e| RemediationError::OpenFailed(e.to_string()))?;

        if !output.success() {
            return Err(RemediationError::OpenFailed(output.stderr.trim().to_string()));
        }

        info!(url = remediation.settings_url(), "Opened privacy settings");
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{Scripted, ScriptedRunner};
    use crate::domain::delivery::ACCESSIBILITY_SETTINGS_URL;

    #[tokio::test]
    async fn open_button_opens_deep_link() {
        let runner = Arc::new(
            ScriptedRunner::new()
                .on("osascript", Scripted::Exit(0, "button returned:Open Settings, gave up:false"))
                .on("open", Scripted::Exit(0, "")),
        );
        let handler = OsascriptRemediation::new(runner.clone());

        handler.present(&Remediation::GrantAccessibility).await.unwrap();

        let opened = runner.calls_to("open");
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].args, [ACCESSIBILITY_SETTINGS_URL]);
    }

    #[tokio::test]
    async fn dismissal_opens_nothing() {
        let runner = Arc::new(
            ScriptedRunner::new().on("osascript", Scripted::Exit(0, "button returned:Later, gave up:false")),
        );
        let handler = OsascriptRemediation::new(runner.clone());

        handler.present(&Remediation::GrantAccessibility).await.unwrap();
        assert!(runner.calls_to("open").is_empty());
    }

    #[tokio::test]
    async fn dialog_spawn_failure_is_reported() {
        let runner = Arc::new(ScriptedRunner::new().on("osascript", Scripted::SpawnError));
        let handler = OsascriptRemediation::new(runner);

        let err = handler
            .present(&Remediation::GrantAccessibility)
            .await
            .unwrap_err();
        assert!(matches!(err, RemediationError::DialogFailed(_)));
    }

    #[test]
    fn script_escapes_quotes() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        let script = OsascriptRemediation::dialog_script(&Remediation::GrantAccessibility);
        assert!(script.starts_with("display dialog"));
        assert!(script.contains(r#"default button "Open Settings""#));
    }
}
