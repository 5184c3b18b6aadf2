//! Saludador - terminal greeting form

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use saludador::form::text;
use saludador::host::Headless;
use saludador::{App, Config, GreetingForm, SubmitOutcome};
use std::path::{Path, PathBuf};

/// Type your name, get a greeting
#[derive(Parser)]
#[command(name = "saludador")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Greet NAME without opening the form (exit code 1 for a blank name)
    Greet {
        /// Name to greet (capped at 20 characters)
        name: String,
    },
    /// Show the effective configuration
    Config {
        /// Print the configuration file path instead
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Greet { name }) => cmd_greet(&name),
        Some(Commands::Config { path }) => cmd_config(cli.config.as_deref(), path),
        None => {
            let config = load_config(cli.config.as_deref())?;
            tracing::info!("Starting form");
            saludador::tui::run(App::new(config))
        }
    }
}

/// Log to the temp dir - tail with: tail -f /tmp/saludador.log
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let log_path = saludador::paths::log_path();
    // Start each run with an empty log file
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let (Some(dir), Some(file_name)) = (log_path.parent(), log_path.file_name()) else {
        return;
    };
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    path.map_or_else(Config::load, Config::load_from)
}

fn cmd_greet(name: &str) -> Result<()> {
    let mut form = GreetingForm::new();
    form.on_input_change(name);

    match form.submit(&mut Headless) {
        SubmitOutcome::Greeted => {
            println!("{}", form.greeting());
            Ok(())
        }
        SubmitOutcome::Rejected => {
            eprintln!("{}", text::ERROR_MESSAGE);
            std::process::exit(1);
        }
    }
}

fn cmd_config(path: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        let path = path.map_or_else(Config::default_path, Path::to_path_buf);
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(path)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}
