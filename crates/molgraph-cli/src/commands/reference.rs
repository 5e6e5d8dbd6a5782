use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use molgraph::{
    core::{io::json::JsonDatasetWriter, structure::catalog::StructureCatalog},
    engine::{config::ReferenceConfig, progress::ProgressReporter},
    workflows,
};
use std::path::Path;
use tracing::info;

pub fn run(catalog: &StructureCatalog, config: &ReferenceConfig, output_dir: &Path) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let mut sink = JsonDatasetWriter::new(output_dir);

    println!(
        "Building reference set '{}' from {} notations...",
        config.name,
        config.notations.len()
    );
    info!("Invoking the reference set workflow...");
    let set = workflows::reference::run(catalog, config, &mut sink, &reporter)?;

    for skipped in &set.skipped {
        println!("  Skipped {}: {}", skipped.notation, skipped.error);
    }
    println!(
        "✓ {} graphs written to {} and {}",
        set.full.len(),
        sink.path_for(&config.full_name()).display(),
        sink.path_for(&config.masked_name()).display()
    );

    Ok(())
}
