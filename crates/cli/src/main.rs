//! T8 condition-monitoring CLI
//!
//! A command-line client for listing, exporting and plotting waveform and
//! spectrum snapshots from a T8 server.

mod client;
mod commands;
mod config;
mod export;
mod output;
mod plot;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use t8_lib::Codec;

use commands::{spectra, waves};

/// T8 condition-monitoring client
#[derive(Parser)]
#[command(name = "t8-client")]
#[command(author, version, about = "CLI client for T8 wave and spectrum data", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Identifiers shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct PointArgs {
    /// Machine identifier
    #[arg(long, short = 'M')]
    pub machine: String,

    /// Measurement point
    #[arg(long, short = 'p')]
    pub point: String,

    /// Processing mode
    #[arg(long, short = 'm')]
    pub pmode: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available waveform snapshots
    ListWaves {
        #[command(flatten)]
        point: PointArgs,
    },

    /// List available spectrum snapshots
    ListSpectra {
        #[command(flatten)]
        point: PointArgs,
    },

    /// Export a waveform snapshot to CSV
    GetWave {
        #[command(flatten)]
        point: PointArgs,

        /// Snapshot date (YYYY-MM-DDTHH:MM:SS, UTC)
        #[arg(long, short = 't')]
        datetime: String,
    },

    /// Export a spectrum snapshot to CSV
    GetSpectrum {
        #[command(flatten)]
        point: PointArgs,

        /// Snapshot date (YYYY-MM-DDTHH:MM:SS, UTC)
        #[arg(long, short = 't')]
        datetime: String,
    },

    /// Render a waveform snapshot as a PNG chart
    PlotWave {
        #[command(flatten)]
        point: PointArgs,

        /// Snapshot date (YYYY-MM-DDTHH:MM:SS, UTC)
        #[arg(long, short = 't')]
        datetime: String,
    },

    /// Render a spectrum snapshot as a PNG chart
    PlotSpectrum {
        #[command(flatten)]
        point: PointArgs,

        /// Snapshot date (YYYY-MM-DDTHH:MM:SS, UTC)
        #[arg(long, short = 't')]
        datetime: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // No subcommand is not an error: show usage and exit cleanly.
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(err) = run(command).await {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    let config = config::Config::load()?;
    let client =
        client::ApiClient::new(&config.host, &config.user, &config.password, Codec::default())?;

    match command {
        Commands::ListWaves { point } => waves::list(&client, &point).await,
        Commands::ListSpectra { point } => spectra::list(&client, &point).await,
        Commands::GetWave { point, datetime } => waves::get(&client, &point, &datetime).await,
        Commands::GetSpectrum { point, datetime } => spectra::get(&client, &point, &datetime).await,
        Commands::PlotWave { point, datetime } => waves::plot(&client, &point, &datetime).await,
        Commands::PlotSpectrum { point, datetime } => {
            spectra::plot(&client, &point, &datetime).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
