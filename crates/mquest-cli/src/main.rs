//! mquest CLI — generate arithmetic practice worksheets.

use std::path::PathBuf;
use std::process;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mquest_core::model::Mode;

mod commands;

#[derive(Parser)]
#[command(
    name = "mquest",
    version,
    about = "Mathematics question generator",
    subcommand_negates_reqs = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

/// Arguments for the default (no subcommand) invocation.
#[derive(Args)]
struct GenerateArgs {
    /// Mode: 'm' (multiplication), 'mm' (mixed multiplication) or 'd' (division)
    #[arg(
        short,
        long,
        required = true,
        value_parser = PossibleValuesParser::new(["m", "mm", "d"]).try_map(|s| s.parse::<Mode>())
    )]
    mode: Option<Mode>,

    /// Operand(s) to multiply or divide by; several for mixed multiplication
    #[arg(
        short,
        long,
        required = true,
        num_args = 1..,
        allow_negative_numbers = true
    )]
    operands: Vec<i64>,

    /// Shuffle the order of questions (multiplication mode only)
    #[arg(short, long)]
    shuffle: bool,

    /// Start day: 0 for Monday, 1 for Tuesday, ..., 6 for Sunday
    #[arg(short = 'd', long, value_parser = clap::value_parser!(u8).range(0..=6))]
    start_day: Option<u8>,

    /// Write to this file instead of printing to stdout
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed for reproducible question order
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a batch of worksheet files from a plan
    Batch {
        /// Plan file path (default: ./mquest.toml, else the built-in plan)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the plan's output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Override the plan's start day (0 = Monday .. 6 = Sunday)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        start_day: Option<u8>,

        /// Seed for reproducible question order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create a starter mquest.toml batch plan
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            config,
            output,
            start_day,
            seed,
        }) => commands::batch::execute(config, output, start_day, seed),
        Some(Commands::Init) => commands::init::execute(),
        None => {
            let GenerateArgs {
                mode,
                operands,
                shuffle,
                start_day,
                file,
                seed,
            } = cli.generate;
            commands::generate::execute(mode, operands, shuffle, start_day, file, seed)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
