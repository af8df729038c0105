//! Clipboard snapshot taken before a paste

/// The clipboard text that was present before a paste started.
///
/// Owned by one paste call and consumed once when the original content is
/// put back.
#[derive(Debug, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    original_text: String,
}

impl ClipboardSnapshot {
    /// Capture the given clipboard text
    pub fn capture(original_text: String) -> Self {
        Self { original_text }
    }

    /// Borrow the captured text
    pub fn text(&self) -> &str {
        &self.original_text
    }

    /// Consume the snapshot for restoration
    pub fn into_text(self) -> String {
        self.original_text
    }
}
