//! Focused-window classification (Linux)

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::delivery::Invocation;
use crate::domain::session::{Platform, SessionInfo};
use crate::domain::window::TerminalRegistry;

use super::ports::CommandRunner;
use super::selector::ToolPresence;

const QUERY_TIMEOUT: Duration = Duration::from_secs(1);

/// Which tool answered the window query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSource {
    Xdotool,
    Kdotool,
}

/// Result of probing the focused window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusProbe {
    /// Lower-cased window class, when a query succeeded
    pub window_class: Option<String>,
    pub source: Option<FocusSource>,
    pub terminal: bool,
}

impl FocusProbe {
    /// xdotool resolved the active window, so X11 input reaches it
    pub fn x11_bridge_confirmed(&self) -> bool {
        self.source == Some(FocusSource::Xdotool) && self.window_class.is_some()
    }
}

/// Decides whether the focused window is a terminal emulator.
///
/// Any probe failure classifies as "not a terminal".
pub struct FocusedWindowClassifier {
    runner: Arc<dyn CommandRunner>,
    registry: TerminalRegistry,
    detect_terminals: bool,
}

impl FocusedWindowClassifier {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        registry: TerminalRegistry,
        detect_terminals: bool,
    ) -> Self {
        Self {
            runner,
            registry,
            detect_terminals,
        }
    }

    /// Whether the focused window is a terminal
    pub async fn is_terminal_focused(&self, session: &SessionInfo, tools: &ToolPresence) -> bool {
        self.probe(session, tools).await.terminal
    }

    /// Query the focused window.
    ///
    /// xdotool is tried first when X11 can reach the window; kdotool covers
    /// KDE Wayland sessions. With terminal detection disabled the xdotool
    /// query still runs on Wayland since it doubles as the bridge check.
    pub async fn probe(&self, session: &SessionInfo, tools: &ToolPresence) -> FocusProbe {
        if session.platform != Platform::Linux {
            return FocusProbe::default();
        }

        let xdotool_usable = tools.has("xdotool") && session.x11_reachable();
        if xdotool_usable && (self.detect_terminals || session.is_wayland) {
            let query = Invocation::new("xdotool", ["getactivewindow", "getwindowclassname"]);
            if let Some(class) = self.query(&query).await {
                return self.classify(class, FocusSource::Xdotool);
            }
        }

        if self.detect_terminals && tools.has("kdotool") {
            if let Some(class) = self.kdotool_class().await {
                return self.classify(class, FocusSource::Kdotool);
            }
        }

        FocusProbe::default()
    }

    async fn kdotool_class(&self) -> Option<String> {
        let window_id = self
            .query(&Invocation::new("kdotool", ["getactivewindow"]))
            .await?;
        self.query(&Invocation::new(
            "kdotool",
            ["getwindowclassname".to_string(), window_id],
        ))
        .await
    }

    fn classify(&self, class: String, source: FocusSource) -> FocusProbe {
        let class = class.to_lowercase();
        let terminal = self.detect_terminals && self.registry.is_terminal_class(&class);
        debug!(window_class = %class, terminal, ?source, "Focused window classified");
        FocusProbe {
            window_class: Some(class),
            source: Some(source),
            terminal,
        }
    }

    /// Trimmed stdout of a successful, non-empty query
    async fn query(&self, invocation: &Invocation) -> Option<String> {
        match self.runner.run(invocation, QUERY_TIMEOUT).await {
            Ok(output) if output.success() => {
                let value = output.stdout.trim();
                (!value.is_empty()).then(|| value.to_string())
            }
            Ok(output) => {
                debug!(command = %invocation, code = ?output.code, "Window query failed");
                None
            }
            Err(e) => {
                debug!(command = %invocation, error = %e, "Window query failed");
                None
            }
        }
    }
}
