use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_ROOT_DIR, DEFAULT_TITLE, IndexerConfig};
use crate::index_storage::save_index;
use crate::indexer::build_report;
use crate::output::format_text_report;

/// Same shape as `date(1)` output, e.g. `Fri Oct 16 12:00:00 +00:00 2026`
const GENERATED_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

#[derive(Parser, Debug)]
#[command(name = "package-indexer")]
#[command(version = "0.1.0")]
#[command(about = "Generate an index of the packages in a monorepo", long_about = None)]
pub struct Cli {
    /// Directory whose immediate subdirectories are indexed
    #[arg(short, long, default_value = DEFAULT_ROOT_DIR)]
    pub root: PathBuf,

    /// Path of the JSON index file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Title line of the text report
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Cli> for IndexerConfig {
    fn from(cli: Cli) -> Self {
        Self { root_dir: cli.root, output_file: cli.output, title: cli.title }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = IndexerConfig::from(cli);
    let stdout = io::stdout();
    generate_index(&config, &mut stdout.lock())
}

/// Index the packages directory, print the report to `out`, and save the JSON index
///
/// Nothing is printed or written if the root directory is missing.
pub fn generate_index(config: &IndexerConfig, out: &mut impl Write) -> Result<()> {
    let report = build_report(&config.root_dir)?;

    let generated = Local::now().format(GENERATED_FORMAT).to_string();
    let text = format_text_report(&report, &config.title, &generated);
    out.write_all(text.as_bytes()).context("Failed to write report")?;

    save_index(&config.output_file, &report)?;

    writeln!(out, "\n✓ JSON index saved to {}", config.output_file.display())
        .context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}
