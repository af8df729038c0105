//! SmartPaste - automated paste delivery
//!
//! This crate places text on the system clipboard and simulates the paste
//! keystroke in whichever application holds input focus, on macOS, Windows,
//! X11 and Wayland. The user's original clipboard is restored afterwards, and
//! every failure leaves the text on the clipboard for a manual paste.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Session facts, delivery mechanisms, paste chords, diagnoses, config
//! - **Application**: Probing services, strategy selector, executor, use case, ports
//! - **Infrastructure**: Adapter implementations (tokio processes, arboard, wl-clipboard, etc.)
//! - **CLI**: Command-line interface, argument parsing, and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
