#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoStrategy, InitStrategy, RunInput, RunStrategy, VersionStrategy,
};
use hms_config::Config;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "Hospital management system: in-memory patient records", long_about = None)]
struct Cli {
    /// Log filter (e.g. `debug`, `hms_core=debug`); overrides `RUST_LOG` and the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive patient menu (default)
    Run {
        /// Maximum number of patient records
        #[arg(short = 'c', long)]
        capacity: Option<usize>,

        /// Heading printed above the menu
        #[arg(short = 't', long)]
        title: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

const FALLBACK_LOG_LEVEL: &str = "warn";

fn build_filter(cli_level: Option<&str>, config_level: &str) -> anyhow::Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::try_new(level)?);
    }

    // A bad level in the config file must not keep the menu from starting.
    Ok(EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LOG_LEVEL)))
}

fn init_tracing(cli_level: Option<&str>, config_level: &str) -> anyhow::Result<()> {
    let filter = build_filter(cli_level, config_level)?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The log filter comes from the config file, so it is read first and
    // any problem with it is reported once the subscriber exists.
    let (config, config_err) = Config::load_or_default();
    init_tracing(cli.log_level.as_deref(), &config.logging.level)?;
    if let Some(e) = config_err {
        warn!("Ignoring config file, using defaults: {e:#}");
    }

    match cli.command.unwrap_or(Commands::Run {
        capacity: None,
        title: None,
    }) {
        Commands::Run { capacity, title } => {
            RunStrategy.execute(RunInput {
                config,
                capacity,
                title,
            })?;
        }
        Commands::Init => InitStrategy.execute(())?,
        Commands::Info => InfoStrategy.execute(config)?,
        Commands::Version => VersionStrategy.execute(())?,
    }

    Ok(())
}
