// folio - portfolio site in the terminal
//
// A single-screen portfolio with three sections (home, works, contact)
// navigated by wheel, keyboard, menu or step buttons.
//
// Architecture:
// - Navigator: section state machine with wheel accumulation and cooldown
// - Trackers: pointer spring and viewport font scale, published over watch channels
// - Theme: two-mode controller, starts dark
// - TUI (ratatui): renders the active section, chrome, menu overlay and cursor dot
// - Ticker: section-scoped interval timers feeding the event loop over mpsc

mod cli;
mod config;
mod content;
mod hover;
mod logging;
mod navigator;
mod theme;
mod ticker;
mod tracker;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Subcommands run and exit without touching the terminal
    if let Some(command) = cli.command.take() {
        return cli::handle_command(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    // Logs go to the in-app buffer (stdout belongs to the TUI) and
    // optionally to rotating JSON files. The guard flushes on drop.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, log_buffer.clone());

    tracing::info!(
        version = config::VERSION,
        theme = config.theme.as_str(),
        mouse = config.mouse_enabled,
        "folio starting"
    );

    let result = tui::run_tui(config, log_buffer).await;
    if let Err(ref e) = result {
        tracing::error!("TUI exited with error: {:#}", e);
    }
    tracing::info!("folio stopped");
    result
}
