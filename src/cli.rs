// CLI module - command-line argument parsing and handlers
//
// `folio` with no subcommand runs the TUI. The `config` subcommand manages
// the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::theme::ThemeMode;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// folio - portfolio site in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Portfolio site in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start in the light theme for this run
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Start in the dark theme for this run
    #[arg(long)]
    pub dark: bool,

    /// Don't capture the mouse (no cursor dot, hover or wheel navigation)
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply per-run flags on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if self.light {
            config.theme = ThemeMode::Light;
        } else if self.dark {
            config.theme = ThemeMode::Dark;
        }
        if self.no_mouse {
            config.mouse_enabled = false;
        }
    }
}

/// Run a subcommand to completion
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show()
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: folio config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().ok_or_else(|| anyhow!("Could not determine config path"))
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    // Config's single source of truth for the file format
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_flag_overrides_theme() {
        let cli = Cli::parse_from(["folio", "--light"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.mouse_enabled);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["folio"]);
        let mut config = Config::default();
        config.theme = ThemeMode::Light;
        cli.apply(&mut config);
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_no_mouse_flag() {
        let cli = Cli::parse_from(["folio", "--no-mouse"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(!config.mouse_enabled);
    }

    #[test]
    fn test_light_and_dark_conflict() {
        assert!(Cli::try_parse_from(["folio", "--light", "--dark"]).is_err());
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = Cli::parse_from(["folio", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }
}
