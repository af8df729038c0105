//! Operating system family

use std::fmt;

use serde::Serialize;

/// OS families the paste engine knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for.
    ///
    /// Other Unix flavours are treated as Linux: they run the same X11/Wayland
    /// tooling.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Key combination a user presses to paste manually
    pub const fn manual_paste_hint(&self) -> &'static str {
        match self {
            Self::MacOs => "Cmd+V",
            Self::Windows | Self::Linux => "Ctrl+V",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
