//! Paste engine: probes the session and delivers through the best mechanism

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::domain::delivery::{Diagnosis, Mechanism, Remediation};
use crate::domain::session::{Platform, SessionInfo};
use crate::domain::window::TerminalRegistry;

use super::error::PasteError;
use super::executor::{Delivered, DeliveryExecutor};
use super::focus::FocusedWindowClassifier;
use super::permission::PermissionGate;
use super::ports::{Clock, CommandRunner, Environment};
use super::selector::{
    diagnose, probed_tools, select_candidates, Selection, SelectorInput, FAST_PASTE_BINARY,
};
use super::tools::ToolAvailabilityCache;

/// Environment variable naming the fast-path binary
pub const FAST_PASTE_ENV: &str = "SMART_PASTE_FAST_PASTE";

/// Engine settings
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub platform: Platform,
    pub cache_ttl: Duration,
    pub terminal_detection: bool,
    pub extra_terminals: Vec<String>,
    /// Explicitly configured fast-path binary
    pub fast_paste_path: Option<PathBuf>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            cache_ttl: Duration::from_secs(30),
            terminal_detection: true,
            extra_terminals: Vec::new(),
            fast_paste_path: None,
        }
    }
}

/// Candidates chosen for one paste, with the inputs that produced them
#[derive(Debug, Clone)]
pub struct DeliveryPlan {
    pub input: SelectorInput,
    pub selection: Selection,
    /// Fix to offer when a fresh probe found the permission missing
    pub remediation: Option<Remediation>,
}

/// Status of one probed tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub available: bool,
}

/// Diagnostics summary of the paste setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteToolsReport {
    pub platform: Platform,
    pub available: bool,
    pub method: String,
    pub tools: Vec<ToolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_install: Option<String>,
}

/// Combines the probing services, selector and executor
pub struct PasteEngine {
    env: Arc<dyn Environment>,
    tools: ToolAvailabilityCache,
    permission: PermissionGate,
    classifier: FocusedWindowClassifier,
    executor: DeliveryExecutor,
    platform: Platform,
    fast_paste_path: Option<PathBuf>,
}

impl PasteEngine {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        env: Arc<dyn Environment>,
        clock: Arc<dyn Clock>,
        options: EngineOptions,
    ) -> Self {
        let platform = options.platform;
        let registry = TerminalRegistry::with_extra(options.extra_terminals);

        Self {
            tools: ToolAvailabilityCache::new(
                runner.clone(),
                platform,
                options.cache_ttl,
                clock.clone(),
            ),
            permission: PermissionGate::new(runner.clone(), platform, options.cache_ttl, clock),
            classifier: FocusedWindowClassifier::new(
                runner.clone(),
                registry,
                options.terminal_detection,
            ),
            executor: DeliveryExecutor::new(runner),
            env,
            platform,
            fast_paste_path: options.fast_paste_path,
        }
    }

    /// Introspect the current session. Never cached.
    pub fn session(&self) -> SessionInfo {
        SessionInfo::detect(self.platform, |key| self.env.var(key))
    }

    /// Whether an executable is on PATH, through the shared cache
    pub async fn command_exists(&self, name: &str) -> bool {
        self.tools.command_exists(name).await
    }

    /// Probe everything and select candidates for one paste
    pub async fn plan(&self) -> DeliveryPlan {
        let session = self.session();
        let tools = self.tools.presence(probed_tools(self.platform)).await;
        let focus = self.classifier.probe(&session, &tools).await;
        let permission = self.permission.check().await;

        let input = SelectorInput {
            x11_bridge_confirmed: focus.x11_bridge_confirmed(),
            terminal: focus.terminal,
            permission_granted: permission.granted,
            fast_paste: self.resolve_fast_paste(),
            session,
            tools,
        };
        let selection = select_candidates(&input);
        debug!(
            candidates = ?selection.candidates.iter().map(|c| c.mechanism).collect::<Vec<_>>(),
            chord = %selection.chord,
            "Delivery planned"
        );

        DeliveryPlan {
            input,
            selection,
            remediation: permission.remediation,
        }
    }

    /// Execute a plan
    pub async fn deliver(&self, plan: &DeliveryPlan) -> Result<Delivered, PasteError> {
        if plan.selection.is_empty() {
            return Err(self.refusal(plan));
        }

        self.executor
            .execute(&plan.selection.candidates)
            .await
            .map_err(|attempts| {
                let diagnosis = diagnose(&plan.input, &plan.selection);
                PasteError::AllMechanismsExhausted {
                    message: diagnosis.to_string(),
                    recommended_install: diagnosis.recommended_install(),
                    attempts,
                }
            })
    }

    fn refusal(&self, plan: &DeliveryPlan) -> PasteError {
        match diagnose(&plan.input, &plan.selection) {
            Diagnosis::AccessibilityDenied => PasteError::PermissionDenied {
                remediation: plan.remediation.clone(),
            },
            diagnosis @ Diagnosis::MissingTool { package, .. } => PasteError::ToolUnavailable {
                package,
                message: diagnosis.to_string(),
            },
            diagnosis => PasteError::AllMechanismsExhausted {
                message: diagnosis.to_string(),
                recommended_install: diagnosis.recommended_install(),
                attempts: Vec::new(),
            },
        }
    }

    /// Summarize the paste setup.
    ///
    /// Only cached probes are used, so repeated calls within the TTL spawn
    /// nothing. The XWayland bridge is assumed live when `DISPLAY` is set.
    pub async fn check_tools(&self) -> PasteToolsReport {
        let session = self.session();
        let tools = self.tools.presence(probed_tools(self.platform)).await;
        let permission = self.permission.check().await;

        let input = SelectorInput {
            x11_bridge_confirmed: session.xwayland_available,
            terminal: false,
            permission_granted: permission.granted,
            fast_paste: self.resolve_fast_paste(),
            session,
            tools,
        };
        let selection = select_candidates(&input);
        let method = selection
            .candidates
            .first()
            .map_or("none", |c| method_name(c.mechanism));
        let recommended_install = if selection.is_empty() {
            diagnose(&input, &selection)
                .recommended_install()
                .map(str::to_string)
        } else {
            None
        };

        PasteToolsReport {
            platform: self.platform,
            available: !selection.is_empty(),
            method: method.to_string(),
            tools: input
                .tools
                .iter()
                .map(|(name, available)| ToolStatus {
                    name: name.to_string(),
                    available,
                })
                .collect(),
            recommended_install,
        }
    }

    /// Locate the fast-path binary: configured path, env override, then
    /// next to the executable.
    fn resolve_fast_paste(&self) -> Option<PathBuf> {
        if self.platform != Platform::Windows {
            return None;
        }

        let configured = self
            .fast_paste_path
            .clone()
            .into_iter()
            .chain(self.env.var(FAST_PASTE_ENV).map(PathBuf::from));
        let bundled = self.env.exe_dir().into_iter().flat_map(|dir| {
            [
                dir.join(FAST_PASTE_BINARY),
                dir.join("resources").join("bin").join(FAST_PASTE_BINARY),
            ]
        });

        let found = configured
            .chain(bundled)
            .find(|path| self.env.file_exists(path));
        debug!(path = ?found, "Fast-path binary lookup");
        found
    }
}

fn method_name(mechanism: Mechanism) -> &'static str {
    match mechanism {
        Mechanism::MacosAppleScript => "applescript",
        Mechanism::WindowsFastPaste => "fast-paste",
        Mechanism::WindowsPowerShell => "powershell",
        Mechanism::LinuxWtype => "wtype",
        Mechanism::LinuxXdotool => "xdotool",
    }
}
