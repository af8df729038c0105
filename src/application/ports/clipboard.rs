//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("wl-copy not found. Please install wl-clipboard.")]
    WlCopyNotFound,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for clipboard operations
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard is empty or holds non-text content
    async fn read(&self) -> Result<Option<String>, ClipboardError>;

    /// Copy text to the system clipboard.
    ///
    /// # Arguments
    /// * `text` - The text to copy
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;

    /// Make the last copied text outlive this process.
    ///
    /// Adapters whose process owns the selection block here until another
    /// client takes it over or a short window passes. Others return at once.
    async fn hand_over(&self) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read(&self) -> Result<Option<String>, ClipboardError> {
        self.as_ref().read().await
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().copy(text).await
    }

    async fn hand_over(&self) -> Result<(), ClipboardError> {
        self.as_ref().hand_over().await
    }
}
