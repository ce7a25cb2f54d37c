use clap::Parser;
use std::path::PathBuf;

use crate::collector::Backend;

/// List the largest files and directories under a path
#[derive(Parser, Debug)]
#[command(name = "largest-dirs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to analyze
    #[arg(value_name = "ROOT_DIR")]
    pub root: PathBuf,

    /// Number of entries to show
    #[arg(value_name = "LIMIT")]
    pub limit: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Size source (overrides config)
    #[arg(short, long, value_enum, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Run the disk-usage command through sudo
    #[arg(long)]
    pub sudo: bool,

    /// Report apparent sizes instead of disk usage
    #[arg(long)]
    pub apparent_size: bool,

    /// Don't cross filesystem boundaries
    #[arg(short = 'x', long)]
    pub one_file_system: bool,

    /// Native walker threads
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Keep only the first word of each reported path
    #[arg(long)]
    pub first_token_paths: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
