//! Terminal emulator registry

/// Window-class fragments of known terminal emulators (lower-case).
///
/// Matched as substrings, so `terminal` also covers xfce4-terminal,
/// mate-terminal, org.gnome.Terminal and friends.
pub const KNOWN_TERMINALS: &[&str] = &[
    "konsole",
    "gnome-terminal",
    "terminal",
    "xterm",
    "urxvt",
    "rxvt",
    "kitty",
    "alacritty",
    "wezterm",
    "foot",
    "ghostty",
    "terminator",
    "tilix",
    "terminology",
    "termite",
    "sakura",
    "guake",
    "yakuake",
    "tilda",
    "ptyxis",
    "blackbox",
    "contour",
    "st-256color",
    "qterminal",
    "lxterminal",
    "cool-retro-term",
];

/// Registry of terminal identifiers, extendable from configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalRegistry {
    extra: Vec<String>,
}

impl TerminalRegistry {
    /// Registry with only the built-in identifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with additional user-supplied identifiers
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: extra
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Whether a window class belongs to a terminal emulator
    pub fn is_terminal_class(&self, window_class: &str) -> bool {
        let class = window_class.trim().to_lowercase();
        if class.is_empty() {
            return false;
        }

        KNOWN_TERMINALS.iter().any(|t| class.contains(t))
            || self.extra.iter().any(|t| class.contains(t.as_str()))
    }
}
