//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod clock;
pub mod config;
pub mod environment;
pub mod notifier;
pub mod process;
pub mod remediation;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use clock::Clock;
pub use config::ConfigStore;
pub use environment::Environment;
pub use notifier::{Notice, NotificationError, Notifier};
pub use process::{CommandError, CommandOutput, CommandRunner};
pub use remediation::{RemediationError, RemediationHandler};
