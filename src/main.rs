use anyhow::Result;
use clap::Parser;
use package_indexer::cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for diagnostics on stderr.
///
/// `--verbose` forces DEBUG; otherwise `RUST_LOG` applies, defaulting to WARN.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("package_indexer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("package_indexer=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("package-indexer starting with args: {:?}", cli);

    run(cli)
}
