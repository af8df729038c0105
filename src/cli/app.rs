//! App runners for each subcommand

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tracing::warn;

use crate::application::ports::{
    Clipboard, Clock, CommandRunner, ConfigStore, Environment, Notice, Notifier,
    RemediationHandler,
};
use crate::application::{EngineOptions, PasteEngine, PasteError, PasteOptions, PasteTextUseCase};
use crate::domain::config::AppConfig;
use crate::domain::session::{Platform, SessionInfo};
use crate::infrastructure::{
    create_clipboard, create_notifier, create_remediation_handler, SystemClock,
    SystemEnvironment, TokioCommandRunner, XdgConfigStore,
};

use super::args::ClipboardAction;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
/// Automatic paste failed; the text is on the clipboard
pub const EXIT_PASTE_FAILED: u8 = 3;

/// Wired-up paste stack
pub struct App {
    pub use_case: PasteTextUseCase<Box<dyn Clipboard>>,
    runner: Arc<dyn CommandRunner>,
    platform: Platform,
}

impl App {
    /// Build the adapters and the use case from merged config
    pub async fn build(config: &AppConfig) -> Self {
        let platform = Platform::current();
        let runner: Arc<dyn CommandRunner> = Arc::new(TokioCommandRunner::new());
        let env: Arc<dyn Environment> = Arc::new(SystemEnvironment::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let engine = PasteEngine::new(
            runner.clone(),
            env,
            clock,
            EngineOptions {
                platform,
                cache_ttl: config.cache_ttl_or_default().as_std(),
                terminal_detection: config.terminal_detection_or_default(),
                extra_terminals: config.extra_terminals_or_default(),
                fast_paste_path: config.fast_paste_path().map(PathBuf::from),
            },
        );

        let session = engine.session();
        let wl_clipboard = session.is_wayland
            && engine.command_exists("wl-copy").await
            && engine.command_exists("wl-paste").await;
        let clipboard = create_clipboard(&session, wl_clipboard);

        let use_case = PasteTextUseCase::new(
            clipboard,
            engine,
            PasteOptions {
                restore_clipboard: config.restore_clipboard_or_default(),
            },
        );

        Self {
            use_case,
            runner,
            platform,
        }
    }
}

/// Run the paste command
pub async fn run_paste(text: Option<String>, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let text = match text {
        Some(text) => text,
        None => match read_stdin().await {
            Ok(text) => text,
            Err(e) => {
                presenter.error(&format!("Failed to read stdin: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
    };

    let app = App::build(config).await;

    let exit = match app.use_case.execute(&text).await {
        Ok(report) => {
            if let Some(mechanism) = report.mechanism {
                presenter.success(&format!("Pasted via {}", mechanism));
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.paste_failure(&e);
            handle_failure(&app, &e, config.notify_or_default()).await;

            if e.text_on_clipboard() {
                ExitCode::from(EXIT_PASTE_FAILED)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
    };

    // Restored original or undelivered text must survive our exit
    app.use_case.hand_over_clipboard().await;
    exit
}

/// Present remediation and notify, best effort
async fn handle_failure(app: &App, error: &PasteError, notify: bool) {
    if let Some(remediation) = error.remediation() {
        let handler = create_remediation_handler(app.platform, app.runner.clone());
        if let Err(e) = handler.present(remediation).await {
            warn!(error = %e, "Remediation failed");
        }
    }

    if notify && error.text_on_clipboard() {
        let notice = Notice::left_on_clipboard(app.platform);
        if let Err(e) = create_notifier().notify(&notice).await {
            warn!(error = %e, "Notification failed");
        }
    }
}

/// Run the check-tools command
pub async fn run_check_tools(json: bool, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let app = App::build(config).await;
    let report = app.use_case.check_tools().await;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => presenter.output(&out),
            Err(e) => {
                presenter.error(&format!("Failed to encode report: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.tools_report(&report);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the clipboard command
pub async fn run_clipboard(action: ClipboardAction, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let app = App::build(config).await;

    let result = match action {
        ClipboardAction::Read => app.use_case.read_clipboard().await.map(|text| {
            if let Some(text) = text {
                presenter.output(&text);
            }
        }),
        ClipboardAction::Write { text } => app
            .use_case
            .write_clipboard(&text)
            .await
            .map(|()| presenter.success("Copied to clipboard")),
    };
    app.use_case.hand_over_clipboard().await;

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the session command
pub fn run_session(json: bool) -> ExitCode {
    let presenter = Presenter::new();
    let env = SystemEnvironment::new();
    let session = SessionInfo::detect(Platform::current(), |key| env.var(key));

    if json {
        match serde_json::to_string_pretty(&session) {
            Ok(out) => presenter.output(&out),
            Err(e) => {
                presenter.error(&format!("Failed to encode session: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.session(&session);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration: defaults < file < CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Read the text to paste from stdin, dropping one trailing newline
async fn read_stdin() -> std::io::Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(strip_trailing_newline(text))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
