use crate::config::SplitJob;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use molgraph::{
    core::{
        io::{json::JsonDatasetWriter, pool::NotationPool},
        structure::catalog::StructureCatalog,
    },
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::Path;
use tracing::info;

pub fn run(catalog: &StructureCatalog, job: &SplitJob, output_dir: &Path) -> Result<()> {
    info!("Loading candidate notations from {:?}", &job.pool);
    let pool = NotationPool::load(&job.pool).map_err(|e| CliError::FileParsing {
        path: job.pool.clone(),
        source: e.into(),
    })?;

    let config = &job.config;
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let mut sink = JsonDatasetWriter::new(output_dir);

    println!(
        "Preparing {} data and {} competition graphs from a pool of {} (seed {})...",
        config.data_size,
        config.competition_size,
        pool.len(),
        config.seed
    );
    let result = workflows::split::run(
        catalog,
        pool.sampler(config.sampling_seed()),
        config,
        &mut sink,
        &reporter,
    )?;

    let stats = &result.stats;
    println!(
        "✓ Accepted {} of {} candidates ({} failed, {} oversized)",
        stats.accepted,
        stats.attempts,
        stats.failures(),
        stats.oversized
    );
    println!(
        "  Data written to {}",
        sink.path_for(&config.data_name).display()
    );
    println!(
        "  Competition written to {}",
        sink.path_for(&config.competition_name).display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use molgraph::engine::config::SplitConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"
        [[molecule]]
        notation = "CO"

        [[molecule.atom]]
        index = 0
        atomic-number = 6
        total-valence = 4
        hybridization = 4
        param = { type = "c3" }

        [[molecule.atom]]
        index = 1
        atomic-number = 8
        total-valence = 2
        hybridization = 4
        param = { type = "oh" }

        [[molecule.bond]]
        begin = 0
        end = 1
        bond-type = 1

        [[molecule]]
        notation = "C"

        [[molecule.atom]]
        index = 0
        atomic-number = 6
        total-valence = 4
        hybridization = 4
        param = { type = "c3" }

        [[molecule]]
        notation = "C1=CC"
        failure = { kind = "validation", message = "unclosed ring" }
    "#;

    fn job(dir: &Path, pool_content: &str) -> SplitJob {
        let pool = dir.join("pool.csv");
        fs::write(&pool, pool_content).unwrap();
        SplitJob {
            pool,
            config: SplitConfigBuilder::new()
                .data_size(4)
                .competition_size(2)
                .seed(11)
                .max_node_size(100)
                .max_attempts(Some(1000))
                .build()
                .unwrap(),
        }
    }

    fn catalog(dir: &Path) -> StructureCatalog {
        let path = dir.join("catalog.toml");
        fs::write(&path, CATALOG).unwrap();
        StructureCatalog::load(&path).unwrap()
    }

    #[test]
    fn writes_data_and_competition_datasets() {
        let dir = tempdir().unwrap();
        let job = job(dir.path(), "notation\nCO\nC\nC1=CC\n");
        let out = dir.path().join("out");

        run(&catalog(dir.path()), &job, &out).unwrap();

        assert!(out.join("data.json").is_file());
        assert!(out.join("competition.json").is_file());
    }

    #[test]
    fn empty_pool_reports_the_pool_path() {
        let dir = tempdir().unwrap();
        let job = job(dir.path(), "notation\n");

        match run(&catalog(dir.path()), &job, dir.path()) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, job.pool),
            _ => panic!("expected a parsing error for the empty pool"),
        }
    }

    #[test]
    fn hopeless_pool_hits_the_attempt_ceiling() {
        let dir = tempdir().unwrap();
        let job = job(dir.path(), "notation\nC1=CC\n");

        let result = run(&catalog(dir.path()), &job, dir.path());
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
