mod commands;
mod config;
mod render;

use anyhow::Context;
use api_client::HttpWellsApi;
use catalog::AppState;
use clap::{Parser, Subcommand};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "pozos", about = "Wells and motocompresor catalog", version)]
struct Cli {
    /// Configuration file, without extension.
    #[arg(long, env = "POZOS_CONFIG", default_value = "config/pozos", global = true)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// KPIs, availability breakdown and per-site well counts.
    Dashboard,
    /// Wells filtered by site and search term.
    List {
        /// Site name. Defaults to the configured view site.
        #[arg(long)]
        site: Option<String>,
        /// Show every site.
        #[arg(long, conflicts_with = "site")]
        all: bool,
        /// Case-insensitive match on name or gateway code.
        #[arg(long)]
        search: Option<String>,
    },
    /// Detail of one well.
    Show { well_id: i32 },
    /// Change the IP of a well's primary equipment.
    SetIp { well_id: i32, ip: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::CliAppConfig::load(&cli.config).context("Failed to load config")?;

    let level: Level = config
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level {:?}", config.log.level))?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!(base_url = %config.api.base_url, "Using backend");
    let api = HttpWellsApi::from_config(&config.api).context("Failed to build HTTP client")?;
    let mut state = AppState::new();

    match cli.command {
        Command::Dashboard => commands::dashboard(&api, &mut state).await,
        Command::List { site, all, search } => {
            let site = match (all, site) {
                (true, _) => None,
                (false, Some(site)) => Some(site),
                (false, None) => Some(config.view.default_site.clone()),
            };
            commands::list(&api, &mut state, site.as_deref(), search.as_deref()).await
        }
        Command::Show { well_id } => commands::show(&api, &mut state, well_id).await,
        Command::SetIp { well_id, ip } => commands::set_ip(&api, &mut state, well_id, &ip).await,
    }
}
