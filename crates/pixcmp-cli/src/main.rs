//! pixcmp - image difference scoring for visual-regression tests
//!
//! Decodes two images and prints a single error score.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixcmp")]
#[command(author, version, about = "Image difference scoring for visual-regression tests")]
#[command(long_about = "
Scores how different two images are. 0 means identical; larger means more
different. Scores from different methods are not comparable.

Examples:
  pixcmp diff golden.png actual.png                 # precise score
  pixcmp diff golden.png actual.png --method fast   # byte scan
  pixcmp diff a.png b.png --threshold 500           # fail above 500
  pixcmp -vv diff a.png b.png --parallel -j 4
  pixcmp formats
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the difference between two images
    #[command(visible_alias = "d")]
    Diff(DiffArgs),

    /// List decodable formats
    Formats,
}

/// Scoring method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Method {
    /// Per-pixel 16-bit comparison; works on any decoded image
    #[default]
    Precise,
    /// Byte scan over canonical 8-bit buffers; much faster
    Fast,
}

#[derive(Args)]
struct DiffArgs {
    /// First image
    a: PathBuf,

    /// Second image
    b: PathBuf,

    /// Scoring method
    #[arg(short, long, value_enum, default_value_t = Method::Precise)]
    method: Method,

    /// Leave alpha out of the precise score
    #[arg(long)]
    no_alpha: bool,

    /// Fail when the score exceeds this value
    #[arg(short, long)]
    threshold: Option<u64>,

    /// Split the comparison across threads
    #[arg(short, long)]
    parallel: bool,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Diff(args) => commands::diff::run(args),
        Commands::Formats => commands::formats::run(),
    }
}
