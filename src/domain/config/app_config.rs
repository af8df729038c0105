//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::duration::Duration;

/// Default log filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinuxConfig {
    /// Probe the focused window to pick the terminal paste chord
    pub terminal_detection: Option<bool>,
    /// Extra window-class fragments treated as terminal emulators
    pub extra_terminals: Option<Vec<String>>,
}

/// Windows-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowsConfig {
    /// Explicit location of the bundled fast-paste binary
    pub fast_paste_path: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub restore_clipboard: Option<bool>,
    pub cache_ttl: Option<String>,
    pub notify: Option<bool>,
    pub log_level: Option<String>,
    pub linux: Option<LinuxConfig>,
    pub windows: Option<WindowsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            restore_clipboard: Some(true),
            cache_ttl: Some(Duration::default_cache_ttl().to_string()),
            notify: Some(false),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            linux: Some(LinuxConfig {
                terminal_detection: Some(true),
                extra_terminals: None,
            }),
            windows: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            restore_clipboard: other.restore_clipboard.or(self.restore_clipboard),
            cache_ttl: other.cache_ttl.or(self.cache_ttl),
            notify: other.notify.or(self.notify),
            log_level: other.log_level.or(self.log_level),
            linux: Self::merge_linux_config(self.linux, other.linux),
            windows: Self::merge_windows_config(self.windows, other.windows),
        }
    }

    fn merge_linux_config(
        base: Option<LinuxConfig>,
        other: Option<LinuxConfig>,
    ) -> Option<LinuxConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LinuxConfig {
                terminal_detection: o.terminal_detection.or(b.terminal_detection),
                extra_terminals: o.extra_terminals.or(b.extra_terminals),
            }),
        }
    }

    fn merge_windows_config(
        base: Option<WindowsConfig>,
        other: Option<WindowsConfig>,
    ) -> Option<WindowsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(WindowsConfig {
                fast_paste_path: o.fast_paste_path.or(b.fast_paste_path),
            }),
        }
    }

    /// Get restore_clipboard setting, or true if not set
    pub fn restore_clipboard_or_default(&self) -> bool {
        self.restore_clipboard.unwrap_or(true)
    }

    /// Get cache TTL as parsed Duration, or default if not set/invalid
    pub fn cache_ttl_or_default(&self) -> Duration {
        self.cache_ttl
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_cache_ttl)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get log level, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get terminal detection setting, or true if not set
    pub fn terminal_detection_or_default(&self) -> bool {
        self.linux
            .as_ref()
            .and_then(|l| l.terminal_detection)
            .unwrap_or(true)
    }

    /// Get extra terminal identifiers (empty if not set)
    pub fn extra_terminals_or_default(&self) -> Vec<String> {
        self.linux
            .as_ref()
            .and_then(|l| l.extra_terminals.clone())
            .unwrap_or_default()
    }

    /// Get the configured fast-paste binary path, if any
    pub fn fast_paste_path(&self) -> Option<&str> {
        self.windows
            .as_ref()
            .and_then(|w| w.fast_paste_path.as_deref())
            .filter(|p| !p.is_empty())
    }
}
