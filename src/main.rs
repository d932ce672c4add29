//! Clipboard Monitor CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clip_monitor::cli::{
    app::{
        load_merged_config, run_about, run_clear, run_copy, run_list, run_monitor, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
};
use clip_monitor::domain::config::{AppConfig, ClipboardTool};
use clip_monitor::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Config subcommand needs no host
    let command = match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        other => other,
    };

    if let Some(tool) = cli.clipboard_tool.as_deref() {
        if let Err(e) = tool.parse::<ClipboardTool>() {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        host_url: cli.host.clone(),
        refresh_interval_ms: cli.interval,
        clipboard_tool: cli.clipboard_tool.clone(),
        time_format: None,
        html_output: cli.html.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    if let Some(tool) = config.clipboard_tool.as_deref() {
        if tool.parse::<ClipboardTool>().is_err() {
            presenter.warn(&format!(
                "Unknown clipboard tool '{}' in config, using {}",
                tool,
                ClipboardTool::default()
            ));
        }
    }

    // Route to appropriate handler
    match command {
        None => run_monitor(&config, cli.yes).await,
        Some(Commands::List) => run_list(&config).await,
        Some(Commands::Copy { text }) => run_copy(&config, &text).await,
        Some(Commands::Clear) => run_clear(&config, cli.yes).await,
        Some(Commands::About) => run_about(&config).await,
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
    }
}
