//! Paste delivery errors

use std::time::Duration;

use thiserror::Error;

use crate::domain::delivery::{Diagnosis, Mechanism, Remediation};

use super::ports::ClipboardError;

/// Typed failure of a paste operation.
///
/// Every variant except [`PasteError::Clipboard`] leaves the delivered text
/// on the clipboard for the user to paste manually.
#[derive(Debug, Clone, Error)]
pub enum PasteError {
    #[error("{}", Diagnosis::AccessibilityDenied)]
    PermissionDenied { remediation: Option<Remediation> },

    #[error("{message}")]
    ToolUnavailable {
        package: &'static str,
        message: String,
    },

    #[error("{mechanism} timed out after {}ms", .timeout.as_millis())]
    MechanismTimeout {
        mechanism: Mechanism,
        timeout: Duration,
    },

    #[error("{mechanism} {}{}", exit_status(.code), stderr_suffix(.stderr))]
    MechanismExitFailure {
        mechanism: Mechanism,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to start {mechanism}: {message}")]
    MechanismSpawnFailed { mechanism: Mechanism, message: String },

    #[error("{message}")]
    AllMechanismsExhausted {
        message: String,
        attempts: Vec<PasteError>,
        /// Package that would open another delivery path
        recommended_install: Option<&'static str>,
    },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl PasteError {
    /// Whether the text was placed on the clipboard before the failure
    pub fn text_on_clipboard(&self) -> bool {
        !matches!(self, Self::Clipboard(_))
    }

    /// Fix the user can apply, when there is one
    pub fn remediation(&self) -> Option<&Remediation> {
        match self {
            Self::PermissionDenied { remediation } => remediation.as_ref(),
            _ => None,
        }
    }

    /// Package whose installation would enable automatic paste
    pub fn recommended_install(&self) -> Option<&'static str> {
        match self {
            Self::ToolUnavailable { package, .. } => Some(*package),
            Self::AllMechanismsExhausted {
                recommended_install,
                ..
            } => *recommended_install,
            _ => None,
        }
    }

    /// Individual mechanism failures that led here
    pub fn attempts(&self) -> &[PasteError] {
        match self {
            Self::AllMechanismsExhausted { attempts, .. } => attempts,
            _ => &[],
        }
    }
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_failure_message_includes_code_and_stderr() {
        let err = PasteError::MechanismExitFailure {
            mechanism: Mechanism::LinuxXdotool,
            code: Some(1),
            stderr: "Can't open display".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "linux-xdotool exited with code 1: Can't open display"
        );
    }

    #[test]
    fn signal_exit_without_stderr() {
        let err = PasteError::MechanismExitFailure {
            mechanism: Mechanism::LinuxWtype,
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "linux-wtype was terminated by a signal");
    }

    #[test]
    fn timeout_message_in_millis() {
        let err = PasteError::MechanismTimeout {
            mechanism: Mechanism::WindowsPowerShell,
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "windows-powershell timed out after 5000ms");
    }

    #[test]
    fn permission_denied_carries_remediation() {
        let err = PasteError::PermissionDenied {
            remediation: Some(Remediation::GrantAccessibility),
        };
        assert_eq!(err.remediation(), Some(&Remediation::GrantAccessibility));
        assert!(err.to_string().contains("Accessibility"));
        assert!(err.text_on_clipboard());
    }

    #[test]
    fn clipboard_failure_leaves_nothing_on_clipboard() {
        let err = PasteError::from(ClipboardError::CopyFailed("busy".to_string()));
        assert!(!err.text_on_clipboard());
        assert!(err.recommended_install().is_none());
    }

    #[test]
    fn exhausted_carries_install_suggestion() {
        let err = PasteError::AllMechanismsExhausted {
            message: "failed".to_string(),
            attempts: Vec::new(),
            recommended_install: Some("wtype"),
        };
        assert_eq!(err.recommended_install(), Some("wtype"));
        assert!(err.text_on_clipboard());
    }
}
