//! Paste text use case

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::delivery::{ClipboardSnapshot, Mechanism};

use super::engine::{PasteEngine, PasteToolsReport};
use super::error::PasteError;
use super::ports::{Clipboard, ClipboardError};

/// Options for the paste use case
#[derive(Debug, Clone)]
pub struct PasteOptions {
    /// Put the original clipboard content back after delivery
    pub restore_clipboard: bool,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            restore_clipboard: true,
        }
    }
}

/// Output from a paste
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteReport {
    /// Mechanism that delivered the text, `None` for empty input
    pub mechanism: Option<Mechanism>,
    /// Whether the original clipboard content was put back
    pub restored: bool,
}

/// Deliver text into the focused application.
///
/// Whole paste operations are serialized so that one call's snapshot and
/// restore never interleave with another's.
pub struct PasteTextUseCase<C: Clipboard> {
    clipboard: C,
    engine: PasteEngine,
    options: PasteOptions,
    guard: Mutex<()>,
}

impl<C: Clipboard> PasteTextUseCase<C> {
    /// Create a new use case instance
    pub fn new(clipboard: C, engine: PasteEngine, options: PasteOptions) -> Self {
        Self {
            clipboard,
            engine,
            options,
            guard: Mutex::new(()),
        }
    }

    /// The engine, for diagnostics
    pub fn engine(&self) -> &PasteEngine {
        &self.engine
    }

    /// Paste `text` into the focused window.
    ///
    /// On failure the text stays on the clipboard; nothing is restored.
    pub async fn execute(&self, text: &str) -> Result<PasteReport, PasteError> {
        if text.is_empty() {
            debug!("Nothing to paste");
            return Ok(PasteReport::default());
        }

        let _guard = self.guard.lock().await;

        let snapshot = self.snapshot().await;
        self.clipboard.copy(text).await?;

        let plan = self.engine.plan().await;
        let delivered = self.engine.deliver(&plan).await?;
        for failure in &delivered.failures {
            debug!(error = %failure, "Recovered from mechanism failure");
        }

        let restored = match snapshot {
            Some(snapshot) if self.options.restore_clipboard => {
                self.restore(snapshot, delivered.restore_delay).await
            }
            _ => false,
        };

        Ok(PasteReport {
            mechanism: Some(delivered.mechanism),
            restored,
        })
    }

    /// Read the clipboard text
    pub async fn read_clipboard(&self) -> Result<Option<String>, ClipboardError> {
        self.clipboard.read().await
    }

    /// Replace the clipboard text
    pub async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.copy(text).await
    }

    /// Keep whatever this process last put on the clipboard available after
    /// exit. Best effort.
    pub async fn hand_over_clipboard(&self) {
        if let Err(e) = self.clipboard.hand_over().await {
            warn!(error = %e, "Clipboard handover failed");
        }
    }

    /// Diagnostics report of the paste setup
    pub async fn check_tools(&self) -> PasteToolsReport {
        self.engine.check_tools().await
    }

    async fn snapshot(&self) -> Option<ClipboardSnapshot> {
        if !self.options.restore_clipboard {
            return None;
        }

        match self.clipboard.read().await {
            Ok(Some(text)) => Some(ClipboardSnapshot::capture(text)),
            Ok(None) => {
                debug!("Clipboard holds no text, skipping restore");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to snapshot clipboard");
                None
            }
        }
    }

    /// Wait for the target to consume the paste, then restore.
    async fn restore(&self, snapshot: ClipboardSnapshot, delay: Duration) -> bool {
        tokio::time::sleep(delay).await;
        match self.clipboard.copy(snapshot.text()).await {
            Ok(()) => {
                info!(delay_ms = delay.as_millis() as u64, "Clipboard restored");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to restore clipboard");
                false
            }
        }
    }
}
