//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the subcommand runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    load_merged_config, run_check_tools, run_clipboard, run_paste, run_session, EXIT_ERROR,
    EXIT_PASTE_FAILED, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{Cli, ClipboardAction, Commands, ConfigAction};
pub use logging::init_logging;
pub use presenter::Presenter;
