//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the clipboard, subprocesses, the XDG config
//! directory and desktop notifications.

pub mod clipboard;
pub mod config;
pub mod notification;
pub mod process;
pub mod remediation;
pub mod system;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier};
pub use process::TokioCommandRunner;
pub use remediation::{create_remediation_handler, LogRemediation, OsascriptRemediation};
pub use system::{SystemClock, SystemEnvironment};
