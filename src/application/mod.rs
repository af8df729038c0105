//! Application layer - Use cases and port interfaces
//!
//! Contains the paste delivery engine and trait definitions
//! for external system interactions.

pub mod cache;
pub mod engine;
pub mod error;
pub mod executor;
pub mod focus;
pub mod paste;
pub mod permission;
pub mod ports;
pub mod selector;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export use cases
pub use engine::{DeliveryPlan, EngineOptions, PasteEngine, PasteToolsReport, ToolStatus};
pub use error::PasteError;
pub use paste::{PasteOptions, PasteReport, PasteTextUseCase};
pub use selector::{select_candidates, BlockReason, Selection, SelectorInput, ToolPresence};
