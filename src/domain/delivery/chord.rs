//! Paste key combinations

use std::fmt;

/// The paste chord sent to the focused window.
///
/// Terminal emulators reserve Ctrl+V for literal input, so they paste with
/// Ctrl+Shift+V instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteChord {
    #[default]
    Standard,
    Terminal,
}

impl PasteChord {
    /// Pick the chord for the focused window
    pub const fn for_window(terminal_focused: bool) -> Self {
        if terminal_focused {
            Self::Terminal
        } else {
            Self::Standard
        }
    }

    /// xdotool named-chord shorthand
    pub const fn xdotool_keys(&self) -> &'static str {
        match self {
            Self::Standard => "ctrl+v",
            Self::Terminal => "ctrl+shift+v",
        }
    }

    /// wtype arguments as an explicit modifier-down, key, modifier-up sequence
    pub fn wtype_args(&self) -> Vec<String> {
        let seq: &[&str] = match self {
            Self::Standard => &["-M", "ctrl", "-k", "v", "-m", "ctrl"],
            Self::Terminal => &["-M", "ctrl", "-M", "shift", "-k", "v", "-m", "shift", "-m", "ctrl"],
        };
        seq.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for PasteChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xdotool_keys())
    }
}
