mod cli_messages;
mod config;
mod consts;
mod controller;
mod display;
mod environment;
mod error_classifier;
mod events;
mod fallback;
mod logging;
mod model;
mod runtime;
mod session;
mod source;
mod ui;

use crate::cli_messages::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use crate::config::{Config, get_config_path};
use crate::consts::dashboard_consts::refresh::auto_refresh_interval;
use crate::environment::{Environment, ParseEnvironmentError};
use crate::session::{
    SessionSettings, run_headless_mode, run_snapshot, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the data source (`local` or an http(s) URL).
const ENVIRONMENT_VAR: &str = "TEAM_DASHBOARD_ENVIRONMENT";

#[derive(Parser)]
#[command(author, version, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Where to read `data/metrics.json` and `data/updates.json` from.
#[derive(clap::Args, Debug, Clone, Default)]
#[group(multiple = false)]
struct SourceArgs {
    /// Base URL of a web server publishing the data resources
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Directory holding the data resources
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl SourceArgs {
    fn environment(&self) -> Result<Option<Environment>, ParseEnvironmentError> {
        if let Some(path) = &self.data_dir {
            return Ok(Some(Environment::Directory { path: path.clone() }));
        }
        self.base_url.as_deref().map(str::parse::<Environment>).transpose()
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        #[command(flatten)]
        source: SourceArgs,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        refresh_interval: Option<u64>,

        /// Run without the terminal UI; press Enter to refresh
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Enable background colors
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Load the dashboard once and print it as plain text
    Snapshot {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Save the data source to the config file
    SetSource {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            source,
            refresh_interval,
            headless,
            with_background,
        } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(&source, config.as_ref())?;
            let refresh_interval = refresh_interval
                .or_else(|| {
                    config
                        .as_ref()
                        .and_then(|c| c.refresh_interval_secs)
                        .filter(|secs| *secs > 0)
                })
                .map(Duration::from_secs)
                .unwrap_or(auto_refresh_interval());

            let session = setup_session(SessionSettings {
                environment,
                refresh_interval,
                echo_writes: headless,
            })?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Snapshot { source } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(&source, config.as_ref())?;
            run_snapshot(environment).await
        }
        Command::SetSource { source } => {
            let Some(environment) = source.environment()? else {
                print_cmd_error!("Nothing to save.", "pass --base-url or --data-dir");
                return Err(Box::from("no data source given"));
            };
            let mut config = load_config(&config_path).unwrap_or_default();
            config.base_url = source.base_url;
            config.data_dir = source.data_dir;
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Data source saved.", "{}", environment.location());
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!(
                "Clearing dashboard configuration...",
                "{}",
                config_path.display()
            );
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared.");
            Ok(())
        }
    }
}

/// Reads the config file if there is one. An unreadable file is reported and ignored.
fn load_config(path: &Path) -> Option<Config> {
    if !path.exists() {
        return None;
    }
    match Config::load_from_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            print_cmd_warn!("Ignoring unreadable config file.", "{}", e);
            None
        }
    }
}

/// Picks the data source: CLI flag, then environment variable, then config file, then local.
fn resolve_environment(
    source: &SourceArgs,
    config: Option<&Config>,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(environment) = source.environment()? {
        return Ok(environment);
    }

    let from_var = std::env::var(ENVIRONMENT_VAR).unwrap_or_default();
    if !from_var.is_empty() {
        match from_var.parse::<Environment>() {
            Ok(environment) => return Ok(environment),
            Err(e) => print_cmd_warn!("Ignoring TEAM_DASHBOARD_ENVIRONMENT.", "{}", e),
        }
    }

    if let Some(config) = config {
        match config.environment() {
            Ok(Some(environment)) => return Ok(environment),
            Ok(None) => {}
            Err(e) => print_cmd_warn!("Ignoring data source in config file.", "{}", e),
        }
    }

    Ok(Environment::default())
}
