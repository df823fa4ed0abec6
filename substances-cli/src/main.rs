//! Substances CLI - inspect and prepare the shop's data folder

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{doctor, effects, format, init, menu};

/// Substances - purchasable status effects for game servers
#[derive(Parser)]
#[command(name = "substances", version, about, long_about = None)]
struct Cli {
    /// Data folder holding config.json (defaults to $SUBSTANCES_DIR or ~/.substances)
    #[arg(long, global = true, env = "SUBSTANCES_DIR")]
    dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config if none exists
    Init,

    /// Preview the menu players will see
    Menu {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List effect names usable in config
    Effects,

    /// Check the config and economy setup
    Doctor {
        /// Show details for each check
        #[arg(long)]
        details: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format an amount with the configured currency symbol
    Format {
        /// Amount, e.g. 5 or 3.1
        amount: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so `--json` output on stdout stays clean
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = commands::get_data_dir(cli.dir)?;

    match cli.command {
        Commands::Init => init::run(&data_dir),
        Commands::Menu { json } => menu::run(&data_dir, json),
        Commands::Effects => effects::run(),
        Commands::Doctor { details, json } => doctor::run(&data_dir, details, json),
        Commands::Format { amount } => format::run(&data_dir, &amount),
    }
}
