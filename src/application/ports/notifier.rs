//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::Platform;

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// A desktop notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub summary: String,
    pub body: String,
    /// freedesktop icon name
    pub icon: &'static str,
}

impl Notice {
    /// Delivery failed; tell the user how to finish the paste by hand
    pub fn left_on_clipboard(platform: Platform) -> Self {
        Self {
            summary: "Automatic paste failed".to_string(),
            body: format!(
                "The text is on your clipboard. Press {} to paste it.",
                platform.manual_paste_hint()
            ),
            icon: "dialog-warning",
        }
    }
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError>;
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        self.as_ref().notify(notice).await
    }
}
