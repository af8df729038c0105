//! Desktop session classification from environment signals

use serde::Serialize;

use super::platform::Platform;

/// Session-type indicator (`wayland`, `x11`, `tty`)
pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";
/// Wayland socket name, set by Wayland compositors
pub const WAYLAND_DISPLAY_VAR: &str = "WAYLAND_DISPLAY";
/// X11 display socket, present under Wayland only when XWayland is running
pub const X11_DISPLAY_VAR: &str = "DISPLAY";
/// Desktop identifier list (e.g. `ubuntu:GNOME`, `KDE`)
pub const CURRENT_DESKTOP_VAR: &str = "XDG_CURRENT_DESKTOP";
/// Legacy desktop session name
pub const DESKTOP_SESSION_VAR: &str = "DESKTOP_SESSION";
/// Set by gnome-shell in every GNOME session
pub const GNOME_SHELL_MODE_VAR: &str = "GNOME_SHELL_SESSION_MODE";

/// Snapshot of the desktop session the paste will land in.
///
/// Recomputed for every paste: the user may switch sessions or the
/// compositor may restart between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub platform: Platform,
    pub is_wayland: bool,
    pub xwayland_available: bool,
    pub desktop_env: String,
    pub is_gnome: bool,
}

impl SessionInfo {
    /// Classify the session from environment lookups.
    ///
    /// Never fails. Missing or empty variables fall back to the safest
    /// reading: not Wayland, no bridge, not GNOME.
    pub fn detect<F>(platform: Platform, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if platform != Platform::Linux {
            return Self::non_linux(platform);
        }

        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let is_wayland = match var(SESSION_TYPE_VAR) {
            Some(kind) => kind.trim().eq_ignore_ascii_case("wayland"),
            None => var(WAYLAND_DISPLAY_VAR).is_some(),
        };

        let desktop_env = var(CURRENT_DESKTOP_VAR)
            .or_else(|| var(DESKTOP_SESSION_VAR))
            .map(|d| d.trim().to_lowercase())
            .unwrap_or_default();

        let is_gnome = desktop_env.contains("gnome") || var(GNOME_SHELL_MODE_VAR).is_some();

        Self {
            platform,
            is_wayland,
            xwayland_available: is_wayland && var(X11_DISPLAY_VAR).is_some(),
            desktop_env,
            is_gnome,
        }
    }

    fn non_linux(platform: Platform) -> Self {
        Self {
            platform,
            is_wayland: false,
            xwayland_available: false,
            desktop_env: String::new(),
            is_gnome: false,
        }
    }

    /// Human-readable display server name
    pub fn display_server(&self) -> &'static str {
        match (self.platform, self.is_wayland) {
            (Platform::Linux, true) => "Wayland",
            (Platform::Linux, false) => "X11",
            (Platform::MacOs, _) => "Quartz",
            (Platform::Windows, _) => "Win32",
        }
    }

    /// Whether X11 tools can reach the focused window at all
    pub fn x11_reachable(&self) -> bool {
        self.platform == Platform::Linux && (!self.is_wayland || self.xwayland_available)
    }
}
