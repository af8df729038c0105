//! Actionable explanations for failed deliveries

use std::fmt;

use crate::domain::session::Platform;

use super::mechanism::Mechanism;

/// Why a paste could not be delivered, and what the user can do about it.
///
/// Every message ends by telling the user the text is still on the
/// clipboard, because it always is when delivery fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    /// macOS denied input-simulation (Accessibility) permission
    AccessibilityDenied,
    /// GNOME's Wayland compositor refuses virtual keyboard input and no
    /// working XWayland path exists; nothing to install
    GnomeWaylandBlocked,
    /// A key-injection tool would make paste work if installed
    MissingTool {
        package: &'static str,
        reason: &'static str,
    },
    /// Every offered mechanism ran and failed (macOS, Windows)
    MechanismsFailed {
        platform: Platform,
        mechanisms: Vec<Mechanism>,
    },
    /// xdotool ran against a plain X11 session and failed
    X11InjectionFailed { mechanisms: Vec<Mechanism> },
    /// wtype ran on a non-GNOME Wayland compositor and failed
    WaylandInjectionFailed {
        desktop: String,
        mechanisms: Vec<Mechanism>,
        /// Package that would add the XWayland path
        suggest: Option<&'static str>,
        /// XWayland is advertised and xdotool installed, but the bridge
        /// did not answer, so xdotool was skipped
        bridge_unverified: bool,
    },
    /// Only xdotool through XWayland ran on a non-GNOME Wayland session
    BridgeOnlyFailed {
        desktop: String,
        /// Package that would add the native Wayland path
        suggest: Option<&'static str>,
    },
    /// xdotool through XWayland failed on GNOME, which offers no native path
    GnomeWaylandBridgeFailed,
    /// Nothing could be offered at all
    NoMechanism { platform: Platform },
}

impl Diagnosis {
    /// Package the user should install, when installing would help
    pub fn recommended_install(&self) -> Option<&'static str> {
        match self {
            Self::MissingTool { package, .. } => Some(*package),
            Self::WaylandInjectionFailed { suggest, .. } | Self::BridgeOnlyFailed { suggest, .. } => {
                *suggest
            }
            _ => None,
        }
    }

    fn manual_hint(&self) -> &'static str {
        match self {
            Self::AccessibilityDenied => Platform::MacOs.manual_paste_hint(),
            Self::GnomeWaylandBlocked
            | Self::MissingTool { .. }
            | Self::X11InjectionFailed { .. }
            | Self::WaylandInjectionFailed { .. }
            | Self::BridgeOnlyFailed { .. }
            | Self::GnomeWaylandBridgeFailed => Platform::Linux.manual_paste_hint(),
            Self::MechanismsFailed { platform, .. } | Self::NoMechanism { platform } => {
                platform.manual_paste_hint()
            }
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessibilityDenied => write!(
                f,
                "Accessibility permission is required for automatic paste. Grant it in System Settings > Privacy & Security > Accessibility."
            )?,
            Self::GnomeWaylandBlocked => write!(
                f,
                "GNOME on Wayland blocks simulated keystrokes for native Wayland apps."
            )?,
            Self::MissingTool { package, reason } => write!(
                f,
                "{}. Install it with your package manager (e.g. `sudo apt install {}`).",
                reason, package
            )?,
            Self::MechanismsFailed { mechanisms, .. } => {
                write!(f, "Automatic paste failed ({}).", tool_list(mechanisms))?
            }
            Self::X11InjectionFailed { mechanisms } => write!(
                f,
                "Automatic paste failed on X11 ({}). Check that DISPLAY points at the running X server.",
                tool_list(mechanisms)
            )?,
            Self::WaylandInjectionFailed {
                desktop,
                mechanisms,
                suggest,
                bridge_unverified,
            } => {
                write!(
                    f,
                    "Automatic paste failed on {} Wayland ({}). The compositor may not support the virtual keyboard protocol.",
                    desktop_label(desktop),
                    tool_list(mechanisms)
                )?;
                if *bridge_unverified {
                    write!(f, " XWayland did not answer, so xdotool was not tried.")?;
                }
                if let Some(package) = suggest {
                    write!(
                        f,
                        " Installing {} adds a path for XWayland apps (e.g. `sudo apt install {}`).",
                        package, package
                    )?;
                }
            }
            Self::BridgeOnlyFailed { desktop, suggest } => {
                write!(
                    f,
                    "Automatic paste failed on {} Wayland: only xdotool through XWayland was tried, and native Wayland windows cannot receive X11 input.",
                    desktop_label(desktop)
                )?;
                if let Some(package) = suggest {
                    write!(
                        f,
                        " Install {} to paste into native Wayland apps (e.g. `sudo apt install {}`).",
                        package, package
                    )?;
                }
            }
            Self::GnomeWaylandBridgeFailed => write!(
                f,
                "Automatic paste through XWayland (xdotool) failed. GNOME on Wayland blocks simulated keystrokes for native Wayland apps, so only XWayland apps can receive automatic paste."
            )?,
            Self::NoMechanism { platform } => write!(
                f,
                "No paste mechanism is available on this {} system.",
                platform
            )?,
        }
        write!(
            f,
            " The text is on your clipboard; press {} to paste it.",
            self.manual_hint()
        )
    }
}

fn tool_list(mechanisms: &[Mechanism]) -> String {
    let names: Vec<&str> = mechanisms.iter().map(|m| m.tool()).collect();
    names.join(", ")
}

fn desktop_label(desktop: &str) -> &str {
    if desktop.is_empty() {
        "this"
    } else {
        desktop
    }
}
