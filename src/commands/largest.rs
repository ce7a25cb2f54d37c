//! Largest entries command implementation

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{LargestError, Result};
use crate::report::{format_header, format_json, format_table, rank, PathMode, SizedEntry, TableOptions};

const SPINNER_TEMPLATE: &str = "{spinner} {prefix:.bold.dim} {wide_msg}";
const SPINNER_TICK_MS: u64 = 100;

/// Parse the requested row count
pub fn parse_limit(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|source| LargestError::InvalidLimit {
            value: value.to_string(),
            source,
        })
}

/// Layer command-line flags over the loaded configuration
pub fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(backend) = cli.backend {
        config.collector.backend = backend;
    }
    if let Some(jobs) = cli.jobs {
        config.collector.threads = jobs;
    }
    if cli.sudo {
        config.collector.sudo = true;
    }
    if cli.apparent_size {
        config.collector.apparent_size = true;
    }
    if cli.one_file_system {
        config.collector.one_file_system = true;
    }
    if cli.first_token_paths {
        config.report.path_mode = PathMode::FirstToken;
    }
    config
}

/// Run the command
pub fn run(cli: &Cli, config: Config) -> Result<()> {
    // Fail on a bad limit before doing any work
    let limit = parse_limit(&cli.limit)?;
    let config = apply_overrides(config, cli);

    let collector = config
        .collector
        .backend
        .collector(config.collect_options());

    tracing::info!(
        root = %cli.root.display(),
        backend = collector.name(),
        limit,
        "Collecting sizes"
    );

    let spinner = new_spinner(cli.quiet);
    spinner.set_prefix(collector.name());
    spinner.set_message(format!("Measuring {}", cli.root.display()));

    let result = collector.collect(&cli.root);
    spinner.finish_and_clear();

    let mut entries = result?;
    tracing::info!(count = entries.len(), "Collected entries");

    rank(&mut entries);

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &entries, &config.table_options(limit), cli.json)
}

/// Write ranked entries as a table (with its header line) or as JSON
pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[SizedEntry],
    options: &TableOptions,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", format_json(entries, options.limit, true)?)?;
    } else {
        writeln!(out, "{}", format_header(options.limit))?;
        writeln!(out, "{}", format_table(entries, options))?;
    }
    Ok(())
}

fn new_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    pb
}
