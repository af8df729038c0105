//! SmartPaste CLI entry point

use std::process::ExitCode;

use clap::Parser;

use smart_paste::cli::{
    app::{load_merged_config, run_check_tools, run_clipboard, run_paste, run_session, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    init_logging,
    presenter::Presenter,
};
use smart_paste::domain::config::AppConfig;
use smart_paste::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Config commands operate on the file itself, not the merged view
    let command = match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        command => command,
    };

    let cli_config = match &command {
        Commands::Paste {
            no_restore, notify, ..
        } => AppConfig {
            restore_clipboard: no_restore.then_some(false),
            notify: notify.then_some(true),
            ..AppConfig::empty()
        },
        _ => AppConfig::empty(),
    };

    let config = load_merged_config(cli_config).await;
    init_logging(config.log_level_or_default());

    match command {
        Commands::Paste { text, .. } => run_paste(text, &config).await,
        Commands::CheckTools { json } => run_check_tools(json, &config).await,
        Commands::Clipboard { action } => run_clipboard(action, &config).await,
        Commands::Session { json } => run_session(json),
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}
