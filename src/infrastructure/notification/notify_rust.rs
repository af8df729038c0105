//! Desktop notification adapter using notify-rust

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Notice, NotificationError, Notifier};

/// Application name shown on notifications
pub const APP_NAME: &str = "SmartPaste";

/// Paste-failure notices should not linger
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Notifier backed by the platform notification service
pub struct NotifyRustNotifier {
    app_name: String,
    timeout: Duration,
}

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        let notice = notice.clone();
        let app_name = self.app_name.clone();
        let timeout = notify_rust::Timeout::Milliseconds(self.timeout.as_millis() as u32);

        // D-Bus round trip on Linux
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&notice.summary)
                .body(&notice.body)
                .icon(notice.icon)
                .timeout(timeout)
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_app_name_and_timeout() {
        let notifier = NotifyRustNotifier::default();
        assert_eq!(notifier.app_name, APP_NAME);
        assert_eq!(notifier.timeout, DEFAULT_TIMEOUT);
    }
}
