//! Delivery strategy selection
//!
//! Pure functions: identical inputs always produce the same ordered
//! candidate list.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::delivery::{DeliveryCandidate, Diagnosis, Invocation, Mechanism, PasteChord};
use crate::domain::session::{Platform, SessionInfo};

/// File name of the bundled Windows fast-path sender
pub const FAST_PASTE_BINARY: &str = "windows-fast-paste.exe";

/// AppleScript sending Cmd+V
pub const APPLESCRIPT_PASTE: &str =
    r#"tell application "System Events" to keystroke "v" using command down"#;

/// PowerShell snippet sending Ctrl+V
pub const POWERSHELL_PASTE: &str =
    "Add-Type -AssemblyName System.Windows.Forms; [System.Windows.Forms.SendKeys]::SendWait('^v')";

/// Tools worth probing on each platform
pub const fn probed_tools(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::MacOs => &["osascript"],
        Platform::Windows => &["powershell"],
        Platform::Linux => &["wtype", "xdotool", "kdotool"],
    }
}

/// Tool availability snapshot taken from the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolPresence {
    tools: BTreeMap<String, bool>,
}

impl ToolPresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, exists: bool) -> Self {
        self.insert(name, exists);
        self
    }

    pub fn insert(&mut self, name: &str, exists: bool) {
        self.tools.insert(name.to_string(), exists);
    }

    /// Whether the tool was probed and found. Unprobed tools are absent.
    pub fn has(&self, name: &str) -> bool {
        self.tools.get(name).copied().unwrap_or(false)
    }

    /// Probed tools in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.tools.iter().map(|(name, exists)| (name.as_str(), *exists))
    }
}

/// Everything the selector looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorInput {
    pub session: SessionInfo,
    pub tools: ToolPresence,
    /// Focused window is a terminal emulator
    pub terminal: bool,
    /// xdotool resolved the active window class
    pub x11_bridge_confirmed: bool,
    pub permission_granted: bool,
    /// Resolved location of the Windows fast-path binary
    pub fast_paste: Option<PathBuf>,
}

/// Why the selector refused to offer any candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    PermissionDenied,
}

/// Ordered candidates, or the reason there are none
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub candidates: Vec<DeliveryCandidate>,
    pub blocked: Option<BlockReason>,
    pub chord: PasteChord,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Build the ordered candidate list
pub fn select_candidates(input: &SelectorInput) -> Selection {
    match input.session.platform {
        Platform::MacOs => select_macos(input),
        Platform::Windows => select_windows(input),
        Platform::Linux => select_linux(input),
    }
}

fn select_macos(input: &SelectorInput) -> Selection {
    if !input.permission_granted {
        return Selection {
            blocked: Some(BlockReason::PermissionDenied),
            ..Selection::default()
        };
    }

    let mut candidates = Vec::new();
    if input.tools.has(Mechanism::MacosAppleScript.tool()) {
        candidates.push(DeliveryCandidate::new(
            Mechanism::MacosAppleScript,
            Invocation::new("osascript", ["-e", APPLESCRIPT_PASTE]),
        ));
    }

    Selection {
        candidates,
        ..Selection::default()
    }
}

fn select_windows(input: &SelectorInput) -> Selection {
    let powershell = input
        .tools
        .has(Mechanism::WindowsPowerShell.tool())
        .then(powershell_candidate);

    let candidate = match (&input.fast_paste, powershell) {
        (Some(path), Some(fallback)) => Some(fast_paste_candidate(path).escalate_to(fallback)),
        (Some(path), None) => Some(fast_paste_candidate(path)),
        (None, fallback) => fallback,
    };

    Selection {
        candidates: candidate.into_iter().collect(),
        ..Selection::default()
    }
}

fn fast_paste_candidate(path: &std::path::Path) -> DeliveryCandidate {
    DeliveryCandidate::new(
        Mechanism::WindowsFastPaste,
        Invocation::new(path.to_string_lossy(), Vec::<String>::new()),
    )
}

fn powershell_candidate() -> DeliveryCandidate {
    DeliveryCandidate::new(
        Mechanism::WindowsPowerShell,
        Invocation::new(
            "powershell",
            ["-NoProfile", "-NonInteractive", "-Command", POWERSHELL_PASTE],
        ),
    )
}

fn select_linux(input: &SelectorInput) -> Selection {
    let session = &input.session;
    let chord = PasteChord::for_window(input.terminal);
    let mut candidates = Vec::new();

    // Mutter does not implement the virtual-keyboard protocol
    if session.is_wayland && !session.is_gnome && input.tools.has("wtype") {
        candidates.push(DeliveryCandidate::new(
            Mechanism::LinuxWtype,
            Invocation::new("wtype", chord.wtype_args()),
        ));
    }

    let x11_target =
        !session.is_wayland || (session.xwayland_available && input.x11_bridge_confirmed);
    if x11_target && input.tools.has("xdotool") {
        candidates.push(DeliveryCandidate::new(
            Mechanism::LinuxXdotool,
            Invocation::new("xdotool", ["key", "--clearmodifiers", chord.xdotool_keys()]),
        ));
    }

    Selection {
        candidates,
        blocked: None,
        chord,
    }
}

/// Most specific explanation for why `selection` did not deliver
pub fn diagnose(input: &SelectorInput, selection: &Selection) -> Diagnosis {
    let session = &input.session;

    if selection.blocked == Some(BlockReason::PermissionDenied) {
        return Diagnosis::AccessibilityDenied;
    }

    if !selection.is_empty() {
        return diagnose_failed_run(input, selection);
    }

    match session.platform {
        Platform::Linux if session.is_wayland && session.is_gnome => {
            if session.xwayland_available && !input.tools.has("xdotool") {
                Diagnosis::MissingTool {
                    package: "xdotool",
                    reason: "Pasting into XWayland apps on GNOME needs xdotool",
                }
            } else {
                Diagnosis::GnomeWaylandBlocked
            }
        }
        Platform::Linux if session.is_wayland => Diagnosis::MissingTool {
            package: "wtype",
            reason: "Automatic paste on Wayland needs wtype",
        },
        Platform::Linux => Diagnosis::MissingTool {
            package: "xdotool",
            reason: "Automatic paste on X11 needs xdotool",
        },
        platform => Diagnosis::NoMechanism { platform },
    }
}

/// Every candidate ran and failed; explain it in terms of the session
fn diagnose_failed_run(input: &SelectorInput, selection: &Selection) -> Diagnosis {
    let session = &input.session;
    let mechanisms: Vec<Mechanism> = selection.candidates.iter().flat_map(|c| c.chain()).collect();
    let wtype_ran = mechanisms.contains(&Mechanism::LinuxWtype);

    match session.platform {
        Platform::Linux if !session.is_wayland => Diagnosis::X11InjectionFailed { mechanisms },
        Platform::Linux if session.is_gnome => Diagnosis::GnomeWaylandBridgeFailed,
        Platform::Linux if wtype_ran => {
            let has_xdotool = input.tools.has("xdotool");
            Diagnosis::WaylandInjectionFailed {
                desktop: session.desktop_env.clone(),
                mechanisms,
                suggest: (session.xwayland_available && !has_xdotool).then_some("xdotool"),
                bridge_unverified: session.xwayland_available
                    && has_xdotool
                    && !input.x11_bridge_confirmed,
            }
        }
        Platform::Linux => Diagnosis::BridgeOnlyFailed {
            desktop: session.desktop_env.clone(),
            suggest: (!input.tools.has("wtype")).then_some("wtype"),
        },
        platform => Diagnosis::MechanismsFailed {
            platform,
            mechanisms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux(vars: &[(&str, &str)]) -> SessionInfo {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SessionInfo::detect(Platform::Linux, move |key| {
            vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    fn input(session: SessionInfo, tools: &[&str]) -> SelectorInput {
        SelectorInput {
            session,
            tools: tools
                .iter()
                .fold(ToolPresence::new(), |p, t| p.with(t, true)),
            terminal: false,
            x11_bridge_confirmed: false,
            permission_granted: true,
            fast_paste: None,
        }
    }

    fn mechanisms(selection: &Selection) -> Vec<Mechanism> {
        selection.candidates.iter().map(|c| c.mechanism).collect()
    }

    #[test]
    fn x11_uses_xdotool() {
        let selection = select_candidates(&input(linux(&[]), &["xdotool"]));
        assert_eq!(mechanisms(&selection), [Mechanism::LinuxXdotool]);
        assert_eq!(
            selection.candidates[0].invocation.args,
            ["key", "--clearmodifiers", "ctrl+v"]
        );
    }

    #[test]
    fn terminal_chord_reaches_both_tools() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "sway"),
            ("DISPLAY", ":0"),
        ]);
        let mut input = input(session, &["wtype", "xdotool"]);
        input.terminal = true;
        input.x11_bridge_confirmed = true;

        let selection = select_candidates(&input);
        assert_eq!(
            mechanisms(&selection),
            [Mechanism::LinuxWtype, Mechanism::LinuxXdotool]
        );
        assert_eq!(selection.chord, PasteChord::Terminal);
        assert!(selection.candidates[0].invocation.args.contains(&"shift".to_string()));
        assert_eq!(selection.candidates[1].invocation.args[2], "ctrl+shift+v");
    }

    #[test]
    fn wayland_bridge_requires_liveness() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "GNOME"),
            ("DISPLAY", ":0"),
        ]);
        let unconfirmed = input(session, &["xdotool"]);
        assert!(select_candidates(&unconfirmed).is_empty());

        let confirmed = SelectorInput {
            x11_bridge_confirmed: true,
            ..unconfirmed
        };
        assert_eq!(
            mechanisms(&select_candidates(&confirmed)),
            [Mechanism::LinuxXdotool]
        );
    }

    #[test]
    fn missing_tools_never_become_candidates() {
        let session = linux(&[("XDG_SESSION_TYPE", "wayland"), ("DISPLAY", ":0")]);
        let mut input = input(session, &[]);
        input.x11_bridge_confirmed = true;
        assert!(select_candidates(&input).is_empty());
    }

    #[test]
    fn macos_denied_is_blocked() {
        let session = SessionInfo::detect(Platform::MacOs, |_| None);
        let mut input = input(session, &["osascript"]);
        input.permission_granted = false;

        let selection = select_candidates(&input);
        assert!(selection.is_empty());
        assert_eq!(selection.blocked, Some(BlockReason::PermissionDenied));
        assert_eq!(diagnose(&input, &selection), Diagnosis::AccessibilityDenied);
    }

    #[test]
    fn macos_granted_has_single_candidate() {
        let session = SessionInfo::detect(Platform::MacOs, |_| None);
        let selection = select_candidates(&input(session, &["osascript"]));
        assert_eq!(mechanisms(&selection), [Mechanism::MacosAppleScript]);
        assert_eq!(selection.candidates[0].pre_delay.as_millis(), 50);
    }

    #[test]
    fn windows_fast_path_escalates_to_powershell() {
        let session = SessionInfo::detect(Platform::Windows, |_| None);
        let mut input = input(session, &["powershell"]);
        input.fast_paste = Some(PathBuf::from("C:/app/windows-fast-paste.exe"));

        let selection = select_candidates(&input);
        assert_eq!(selection.candidates.len(), 1);
        assert_eq!(
            selection.candidates[0].chain(),
            [Mechanism::WindowsFastPaste, Mechanism::WindowsPowerShell]
        );
    }

    #[test]
    fn windows_without_fast_path_uses_powershell() {
        let session = SessionInfo::detect(Platform::Windows, |_| None);
        let selection = select_candidates(&input(session, &["powershell"]));
        assert_eq!(mechanisms(&selection), [Mechanism::WindowsPowerShell]);
        assert!(selection.candidates[0].escalation.is_none());
    }

    #[test]
    fn gnome_xwayland_without_xdotool_recommends_it() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "ubuntu:GNOME"),
            ("DISPLAY", ":0"),
        ]);
        let input = input(session, &["wtype"]);
        let selection = select_candidates(&input);
        assert_eq!(
            diagnose(&input, &selection).recommended_install(),
            Some("xdotool")
        );
    }

    #[test]
    fn plain_wayland_recommends_wtype() {
        let session = linux(&[("XDG_SESSION_TYPE", "wayland"), ("XDG_CURRENT_DESKTOP", "KDE")]);
        let input = input(session, &[]);
        let selection = select_candidates(&input);
        assert_eq!(
            diagnose(&input, &selection).recommended_install(),
            Some("wtype")
        );
    }

    #[test]
    fn x11_failure_is_reported_as_x11() {
        let input = input(linux(&[]), &["xdotool"]);
        let selection = select_candidates(&input);
        assert_eq!(
            diagnose(&input, &selection),
            Diagnosis::X11InjectionFailed {
                mechanisms: vec![Mechanism::LinuxXdotool],
            }
        );
    }

    #[test]
    fn kde_wayland_bridge_only_failure_suggests_wtype() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "KDE"),
            ("DISPLAY", ":0"),
        ]);
        let mut input = input(session, &["xdotool"]);
        input.x11_bridge_confirmed = true;
        let selection = select_candidates(&input);

        let diagnosis = diagnose(&input, &selection);
        assert_eq!(
            diagnosis,
            Diagnosis::BridgeOnlyFailed {
                desktop: "kde".to_string(),
                suggest: Some("wtype"),
            }
        );
        assert!(diagnosis.to_string().contains("Wayland"));
    }

    #[test]
    fn gnome_wayland_bridge_failure_is_gnome_specific() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "GNOME"),
            ("DISPLAY", ":0"),
        ]);
        let mut input = input(session, &["xdotool", "wtype"]);
        input.x11_bridge_confirmed = true;
        let selection = select_candidates(&input);

        let diagnosis = diagnose(&input, &selection);
        assert_eq!(diagnosis, Diagnosis::GnomeWaylandBridgeFailed);
        assert!(diagnosis.recommended_install().is_none());
    }

    #[test]
    fn wtype_failure_with_bridge_but_no_xdotool_suggests_it() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "sway"),
            ("DISPLAY", ":0"),
        ]);
        let input = input(session, &["wtype"]);
        let selection = select_candidates(&input);

        let diagnosis = diagnose(&input, &selection);
        assert_eq!(
            diagnosis,
            Diagnosis::WaylandInjectionFailed {
                desktop: "sway".to_string(),
                mechanisms: vec![Mechanism::LinuxWtype],
                suggest: Some("xdotool"),
                bridge_unverified: false,
            }
        );
    }

    #[test]
    fn wtype_failure_with_silent_bridge_notes_skipped_xdotool() {
        let session = linux(&[
            ("XDG_SESSION_TYPE", "wayland"),
            ("XDG_CURRENT_DESKTOP", "sway"),
            ("DISPLAY", ":0"),
        ]);
        let input = input(session, &["wtype", "xdotool"]);
        let selection = select_candidates(&input);

        match diagnose(&input, &selection) {
            Diagnosis::WaylandInjectionFailed {
                suggest,
                bridge_unverified,
                ..
            } => {
                assert_eq!(suggest, None);
                assert!(bridge_unverified);
            }
            other => panic!("Expected WaylandInjectionFailed, got {:?}", other),
        }
    }

    #[test]
    fn wtype_failure_without_xwayland_has_no_suggestion() {
        let session = linux(&[("XDG_SESSION_TYPE", "wayland"), ("XDG_CURRENT_DESKTOP", "Hyprland")]);
        let input = input(session, &["wtype"]);
        let selection = select_candidates(&input);

        let diagnosis = diagnose(&input, &selection);
        assert!(diagnosis.recommended_install().is_none());
        assert!(diagnosis.to_string().contains("hyprland Wayland"));
    }

    #[test]
    fn non_linux_failures_list_mechanisms() {
        let session = SessionInfo::detect(Platform::Windows, |_| None);
        let input = input(session, &["powershell"]);
        let selection = select_candidates(&input);
        assert_eq!(
            diagnose(&input, &selection),
            Diagnosis::MechanismsFailed {
                platform: Platform::Windows,
                mechanisms: vec![Mechanism::WindowsPowerShell],
            }
        );
    }
}
