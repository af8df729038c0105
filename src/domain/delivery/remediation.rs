//! Remediation actions handed back to the caller

/// Deep link into the macOS Accessibility privacy pane
pub const ACCESSIBILITY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";

/// Something the caller can offer the user to fix a denied paste.
///
/// The engine only reports these; presenting them (a dialog, a log line) is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remediation {
    /// Ask the user to grant Accessibility permission
    GrantAccessibility,
}

impl Remediation {
    /// Dialog title
    pub const fn title(&self) -> &'static str {
        match self {
            Self::GrantAccessibility => "Accessibility Permission Required",
        }
    }

    /// Dialog body
    pub const fn message(&self) -> &'static str {
        match self {
            Self::GrantAccessibility => {
                "SmartPaste needs Accessibility permission to paste into other apps. \
                 Open System Settings and enable it for your terminal or this app."
            }
        }
    }

    /// Settings deep link
    pub const fn settings_url(&self) -> &'static str {
        match self {
            Self::GrantAccessibility => ACCESSIBILITY_SETTINGS_URL,
        }
    }
}
