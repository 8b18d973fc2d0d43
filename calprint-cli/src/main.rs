mod commands;
mod events_file;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calprint")]
#[command(about = "Turn a list of events into an .ics calendar file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the calendar built from an events file
    Render {
        /// TOML file with [[event]] tables
        events: PathBuf,
    },
    /// Write the calendar built from an events file to disk
    Write {
        /// TOML file with [[event]] tables
        events: PathBuf,

        /// Output file name (defaults to the events file name with .ics)
        #[arg(short, long)]
        output: Option<String>,

        /// Output directory (defaults to output_dir from the config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Show the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { events } => commands::render::run(&events),
        Commands::Write {
            events,
            output,
            dir,
        } => commands::write::run(&events, output, dir),
        Commands::Config => commands::config::run(),
    }
}
