//! Clipboard infrastructure module
//!
//! Uses wl-clipboard on Wayland sessions where it is installed, and
//! arboard everywhere else.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use tracing::debug;

use crate::application::ports::Clipboard;
use crate::domain::session::SessionInfo;

/// Create the clipboard adapter for the session.
///
/// # Arguments
/// * `session` - The introspected session
/// * `wl_clipboard_installed` - Whether both wl-copy and wl-paste are on PATH
pub fn create_clipboard(session: &SessionInfo, wl_clipboard_installed: bool) -> Box<dyn Clipboard> {
    if session.is_wayland && wl_clipboard_installed {
        debug!("Using wl-clipboard");
        Box::new(WaylandClipboard::new())
    } else {
        debug!("Using arboard clipboard");
        Box::new(ArboardClipboard::new())
    }
}
