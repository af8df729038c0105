//! CLI presenter for output formatting

use colored::*;

use crate::application::{PasteError, PasteToolsReport};
use crate::domain::session::SessionInfo;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr; stdout only carries requested data.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a failed paste with the mechanism failures behind it
    pub fn paste_failure(&self, error: &PasteError) {
        self.error(&error.to_string());
        for attempt in error.attempts() {
            eprintln!("  {} {}", "-".dimmed(), attempt);
        }
        if let Some(package) = error.recommended_install() {
            self.info(&format!("Recommended: install {}", package.bold()));
        }
    }

    /// Print the paste tools report
    pub fn tools_report(&self, report: &PasteToolsReport) {
        self.key_value("platform", report.platform.as_str());
        let available = if report.available {
            "yes".green()
        } else {
            "no".red()
        };
        self.key_value("available", &available.to_string());
        self.key_value("method", &report.method);
        for tool in &report.tools {
            let mark = if tool.available {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("  {} {}", mark, tool.name);
        }
        if let Some(package) = &report.recommended_install {
            self.key_value("recommended install", package);
        }
    }

    /// Print the introspected session
    pub fn session(&self, session: &SessionInfo) {
        self.key_value("platform", session.platform.as_str());
        self.key_value("display server", session.display_server());
        let desktop = if session.desktop_env.is_empty() {
            "(unknown)"
        } else {
            &session.desktop_env
        };
        self.key_value("desktop", desktop);
        self.key_value("gnome", &session.is_gnome.to_string());
        self.key_value("xwayland", &session.xwayland_available.to_string());
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
