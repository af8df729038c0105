//! Domain layer - Core paste-delivery model
//!
//! Contains value objects, the terminal registry, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod delivery;
pub mod error;
pub mod session;
pub mod window;

// Re-export common types
pub use config::AppConfig;
pub use delivery::{
    ClipboardSnapshot, DeliveryCandidate, Diagnosis, Invocation, Mechanism, PasteChord,
    Remediation,
};
pub use error::*;
pub use session::{Platform, SessionInfo};
pub use window::TerminalRegistry;
