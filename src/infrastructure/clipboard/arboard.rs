//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).
//!
//! On X11 the selection is served by the process that set it, so one
//! `arboard::Clipboard` is held for the adapter's whole lifetime instead of
//! being dropped after every call.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// How long `hand_over` keeps serving the selection before exit
pub const HANDOVER_WINDOW: Duration = Duration::from_secs(2);

#[derive(Default)]
struct State {
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
    clipboard: Option<arboard::Clipboard>,
    last_copied: Option<String>,
}

impl State {
    /// Run `f` against the held clipboard, opening it on first use
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
    fn with_clipboard<T>(
        &mut self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(open()?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => f(clipboard),
            None => Err(ClipboardError::ClipboardUnavailable(
                "clipboard not open".to_string(),
            )),
        }
    }

    /// The OS keeps the data once set, so a short-lived handle is enough
    #[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
    fn with_clipboard<T>(
        &mut self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        f(&mut open()?)
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
}

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard {
    state: Arc<Mutex<State>>,
    handover_window: Duration,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter. The display connection is
    /// opened on first use.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            handover_window: HANDOVER_WINDOW,
        }
    }

    /// Run `f` against the shared state on a blocking thread
    async fn with_state<T, F>(&self, f: F) -> Result<T, ClipboardError>
    where
        T: Send + 'static,
        F: FnOnce(&mut State) -> Result<T, ClipboardError> + Send + 'static,
    {
        let state = self.state.clone();
        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || f(&mut lock(&state)))
            .await
            .map_err(|e| ClipboardError::ClipboardUnavailable(format!("Task join error: {}", e)))?
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<Option<String>, ClipboardError> {
        self.with_state(|state| {
            state.with_clipboard(|clipboard| match clipboard.get_text() {
                Ok(text) => Ok(Some(text)),
                Err(arboard::Error::ContentNotAvailable) => Ok(None),
                Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
            })
        })
        .await
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        self.with_state(move |state| {
            state.with_clipboard(|clipboard| {
                clipboard
                    .set_text(text.as_str())
                    .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
            })?;
            state.last_copied = Some(text);
            Ok(())
        })
        .await
    }

    async fn hand_over(&self) -> Result<(), ClipboardError> {
        let window = self.handover_window;

        self.with_state(move |state| {
            let Some(text) = state.last_copied.take() else {
                return Ok(());
            };
            state.with_clipboard(|clipboard| serve_until_taken(clipboard, &text, window))
        })
        .await
    }
}

/// Keep serving `text` until another client owns the selection or `window`
/// passes. Dropping the clipboard afterwards offers it to a clipboard manager.
#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn serve_until_taken(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    window: Duration,
) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait_until(std::time::Instant::now() + window)
        .text(text)
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

/// The OS clipboard owns the data here; nothing to wait for.
#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn serve_until_taken(
    _clipboard: &mut arboard::Clipboard,
    _text: &str,
    _window: Duration,
) -> Result<(), ClipboardError> {
    Ok(())
}
