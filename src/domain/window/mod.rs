//! Focused-window domain module

mod terminal;

pub use terminal::{TerminalRegistry, KNOWN_TERMINALS};
