//! hooktable CLI
//!
//! Extracts the webhook events and their activity types from the GitHub
//! Docs page *Events that trigger workflows* and writes them as Rust source.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use hooktable_core::{Destination, Generator, GeneratorConfig, Source};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let (src, dst) = cli.source_and_destination();
    let source = match src {
        Some(path) => Source::File(PathBuf::from(path)),
        None => Source::Url(config.source_url.clone()),
    };
    let destination = Destination::from_arg(dst);
    debug!(%source, %destination, "Resolved input and output");

    let body = load_source(&source)?;

    let generator = Generator::new(config);
    let generated = generator.generate(&body).into_diagnostic()?;
    destination.write(&generated).into_diagnostic()?;

    info!("Successfully wrote output to {}", destination);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            GeneratorConfig::from_file(path).into_diagnostic()?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(url) = &cli.url {
        config.source_url = url.clone();
    }
    Ok(config)
}

fn load_source(source: &Source) -> Result<Vec<u8>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    runtime.block_on(source.load()).into_diagnostic()
}
