//! Delivery mechanisms and their platform-tuned timing

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Timing envelope for a single delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MechanismTiming {
    /// Wait after the clipboard write before the keystroke is sent
    pub pre_delay: Duration,
    /// Hard limit for the tool to exit; the child is killed past it
    pub timeout: Duration,
    /// Wait after a successful paste before the original clipboard returns
    pub restore_delay: Duration,
}

/// One way of simulating the paste keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mechanism {
    /// macOS: System Events keystroke through osascript
    MacosAppleScript,
    /// Windows: bundled low-latency SendInput helper
    WindowsFastPaste,
    /// Windows: PowerShell SendKeys
    WindowsPowerShell,
    /// Linux: wtype (Wayland virtual-keyboard protocol)
    LinuxWtype,
    /// Linux: xdotool (X11 / XWayland)
    LinuxXdotool,
}

impl Mechanism {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MacosAppleScript => "macos-applescript",
            Self::WindowsFastPaste => "windows-fast-paste",
            Self::WindowsPowerShell => "windows-powershell",
            Self::LinuxWtype => "linux-wtype",
            Self::LinuxXdotool => "linux-xdotool",
        }
    }

    /// Name of the executable backing this mechanism
    pub const fn tool(&self) -> &'static str {
        match self {
            Self::MacosAppleScript => "osascript",
            Self::WindowsFastPaste => "windows-fast-paste",
            Self::WindowsPowerShell => "powershell",
            Self::LinuxWtype => "wtype",
            Self::LinuxXdotool => "xdotool",
        }
    }

    /// Platform-tuned timing.
    ///
    /// The macOS pre-delay lets the pasteboard change count settle before
    /// System Events reads it. PowerShell SendKeys posts into the target's
    /// message queue and returns before the paste is processed, hence the
    /// longest restore delay.
    pub const fn timing(&self) -> MechanismTiming {
        match self {
            Self::MacosAppleScript => MechanismTiming {
                pre_delay: Duration::from_millis(50),
                timeout: Duration::from_secs(3),
                restore_delay: Duration::from_millis(100),
            },
            Self::WindowsFastPaste => MechanismTiming {
                pre_delay: Duration::ZERO,
                timeout: Duration::from_secs(2),
                restore_delay: Duration::from_millis(80),
            },
            Self::WindowsPowerShell => MechanismTiming {
                pre_delay: Duration::ZERO,
                timeout: Duration::from_secs(5),
                restore_delay: Duration::from_millis(200),
            },
            Self::LinuxWtype | Self::LinuxXdotool => MechanismTiming {
                pre_delay: Duration::ZERO,
                timeout: Duration::from_secs(1),
                restore_delay: Duration::from_millis(150),
            },
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Mechanism; 5] = [
        Mechanism::MacosAppleScript,
        Mechanism::WindowsFastPaste,
        Mechanism::WindowsPowerShell,
        Mechanism::LinuxWtype,
        Mechanism::LinuxXdotool,
    ];

    #[test]
    fn timing_stays_within_tuned_bounds() {
        for mechanism in ALL {
            let timing = mechanism.timing();
            assert!(timing.pre_delay <= Duration::from_millis(50), "{mechanism}");
            assert!(timing.restore_delay >= Duration::from_millis(80), "{mechanism}");
            assert!(timing.restore_delay <= Duration::from_millis(200), "{mechanism}");
        }
    }

    #[test]
    fn timeouts_per_platform() {
        assert_eq!(Mechanism::LinuxXdotool.timing().timeout, Duration::from_secs(1));
        assert_eq!(Mechanism::LinuxWtype.timing().timeout, Duration::from_secs(1));
        assert_eq!(Mechanism::WindowsFastPaste.timing().timeout, Duration::from_secs(2));
        assert_eq!(Mechanism::MacosAppleScript.timing().timeout, Duration::from_secs(3));
        assert_eq!(Mechanism::WindowsPowerShell.timing().timeout, Duration::from_secs(5));
    }

    #[test]
    fn mechanism_display() {
        assert_eq!(Mechanism::LinuxWtype.to_string(), "linux-wtype");
        assert_eq!(Mechanism::LinuxWtype.tool(), "wtype");
    }
}
