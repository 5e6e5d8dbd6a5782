mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::config::DefaultsConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use molgraph::core::structure::catalog::StructureCatalog;
use tracing::{debug, error, info, warn};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("molgraph CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = run_pipelines(&cli, &DefaultsConfig::default());
    match &result {
        Ok(()) => info!("All configured datasets prepared."),
        Err(e) => error!("Run failed: {}", e),
    }
    result
}

fn run_pipelines(cli: &Cli, defaults: &DefaultsConfig) -> Result<()> {
    let app = config::build_config(cli, defaults)?;

    if app.reference.is_none() && app.split.is_none() {
        warn!("Both the reference set and the split are disabled; nothing to do.");
        println!("Nothing to do: every pipeline is disabled in the configuration.");
        return Ok(());
    }

    info!("Loading structure catalog from {:?}", &app.catalog);
    let catalog = StructureCatalog::load(&app.catalog).map_err(|e| CliError::FileParsing {
        path: app.catalog.clone(),
        source: e.into(),
    })?;

    if let Some(reference) = &app.reference {
        info!("Dispatching to the reference set.");
        commands::reference::run(&catalog, reference, &app.output_dir)?;
    }
    if let Some(split) = &app.split {
        info!("Dispatching to the data/competition split.");
        commands::split::run(&catalog, split, &app.output_dir)?;
    }

    Ok(())
}
