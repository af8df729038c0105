//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// SmartPaste - deliver text into the focused window
#[derive(Parser, Debug)]
#[command(name = "smart-paste")]
#[command(version)]
#[command(about = "Paste text into the focused application through the clipboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paste text into the focused window (reads stdin when TEXT is omitted)
    Paste {
        /// Text to deliver
        text: Option<String>,

        /// Leave the pasted text on the clipboard instead of restoring it
        #[arg(long)]
        no_restore: bool,

        /// Show a desktop notification when automatic paste fails
        #[arg(short = 'n', long)]
        notify: bool,
    },
    /// Report which paste tools are available
    CheckTools {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read or write the clipboard
    Clipboard {
        #[command(subcommand)]
        action: ClipboardAction,
    },
    /// Show the detected desktop session
    Session {
        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Clipboard action subcommands
#[derive(Subcommand, Debug)]
pub enum ClipboardAction {
    /// Print the clipboard text
    Read,
    /// Replace the clipboard text
    Write {
        /// Text to copy
        text: String,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "restore_clipboard",
    "cache_ttl",
    "notify",
    "log_level",
    "linux.terminal_detection",
    "linux.extra_terminals",
    "windows.fast_paste_path",
];

/// Accepted `log_level` values
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
