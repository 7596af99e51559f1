//! Vino CLI
//!
//! Browse Indonesia's COVID-19 referral hospitals, locate them on a map and
//! hand them to the maps app or dialer.

#![allow(clippy::print_stdout)]

mod browse;
mod commands;
mod context;
mod render;
mod selector;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use domain::Platform;
use infrastructure::{AppConfig, init_tracing};
use tracing::info;

use crate::commands::user_error;
use crate::context::{AppContext, Overrides};
use crate::selector::Selector;

/// Vino CLI
#[derive(Parser)]
#[command(name = "vino-cli")]
#[command(author, version, about = "COVID-19 referral hospital directory", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "VINO_CONFIG")]
    config: Option<PathBuf>,

    /// Platform whose maps and dialer URIs are used (ios or android)
    #[arg(long, global = true)]
    platform: Option<Platform>,

    /// Deny location access, so no map is resolved
    #[arg(long, global = true)]
    deny_location: bool,

    /// Print URIs instead of opening them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List hospitals, optionally filtered
    ///
    /// The query matches name, address or region, case-insensitively.
    List {
        /// Search query
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show a hospital with its map location
    Show(Target),

    /// Open a hospital in the maps app
    OpenMap(Target),

    /// Call a hospital
    Call(Target),

    /// Browse interactively: each line is a new search
    Browse,
}

/// Which hospital a command acts on
#[derive(Args)]
struct Target {
    /// List position (`3` or `#3`) or exact name
    #[arg(required_unless_present = "hospital_json", conflicts_with = "hospital_json")]
    selector: Option<Selector>,

    /// Filter applied before resolving a list position
    #[arg(short, long, default_value = "", conflicts_with = "hospital_json")]
    query: String,

    /// Serialized hospital record, as passed between screens
    #[arg(long)]
    hospital_json: Option<String>,
}

impl Cli {
    const fn overrides(&self) -> Overrides {
        Overrides {
            platform: self.platform,
            deny_location: self.deny_location,
            dry_run: self.dry_run,
        }
    }
}

async fn open_target(
    context: &AppContext,
    target: &Target,
) -> anyhow::Result<application::HospitalDetailScreen> {
    if let Some(json) = target.hospital_json.as_deref() {
        return context
            .detail_screen_from_param(Some(json))
            .map_err(|e| user_error(&e));
    }

    let Some(selector) = target.selector.as_ref() else {
        return context
            .detail_screen_from_param(None)
            .map_err(|e| user_error(&e));
    };

    let mut list = commands::load_list(context, &target.query).await?;
    let hospital = commands::pick(&list, selector);
    list.unmount();

    context
        .detail_screen(&hospital?)
        .map_err(|e| user_error(&e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.overrides().apply(&mut config);

    init_tracing(cli.verbose, config.telemetry.log_format)
        .context("Failed to initialize logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting vino-cli");

    let context = AppContext::from_config(&config).map_err(|e| user_error(&e))?;

    match cli.command {
        Commands::List { query } => {
            let mut list = commands::load_list(&context, &query).await?;
            println!("{}", render::hospital_list(&list.visible()));
            list.unmount();
        },

        Commands::Show(target) => {
            let screen = open_target(&context, &target).await?;
            print!("{}", commands::show(screen).await);
        },

        Commands::OpenMap(target) => {
            let screen = open_target(&context, &target).await?;
            println!("{}", commands::open_map(screen, context.dry_run()).await);
        },

        Commands::Call(target) => {
            let screen = open_target(&context, &target).await?;
            println!("{}", commands::call(screen, context.dry_run()).await);
        },

        Commands::Browse => browse::run(&context).await?,
    }

    Ok(())
}
