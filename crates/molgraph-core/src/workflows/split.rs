use crate::core::io::traits::DatasetSink;
use crate::core::structure::StructureGenerator;
use crate::engine::config::SplitConfig;
use crate::engine::curation::{CorpusCurator, CurationStats};
use crate::engine::error::EngineError;
use crate::engine::partition::{DatasetPartitioner, PartitionedCorpus};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SplitResult {
    pub partition: PartitionedCorpus,
    pub stats: CurationStats,
}

/// Curates `data_size + competition_size` graphs from `stream` and partitions them
/// with the configured seed.
#[instrument(skip_all, name = "split_preparation", fields(seed = config.seed))]
pub fn prepare<G, I>(
    generator: &G,
    stream: I,
    config: &SplitConfig,
    reporter: &ProgressReporter,
) -> Result<SplitResult, EngineError>
where
    G: StructureGenerator,
    I: IntoIterator<Item = String>,
{
    reporter.report(Progress::PhaseStart {
        name: "Curating corpus",
    });
    let curator = CorpusCurator::new(generator, config.curation(), reporter);
    let outcome = curator.curate(stream)?;
    reporter.report(Progress::PhaseFinish);

    let partition =
        DatasetPartitioner::new(config.data_size, config.competition_size, config.seed)
            .partition(outcome.corpus)?;
    info!(
        "Split corpus into {} data and {} competition graphs.",
        partition.data_indices().len(),
        partition.competition_indices().len()
    );

    Ok(SplitResult {
        partition,
        stats: outcome.stats,
    })
}

/// Runs [`prepare`] and writes both subsets to `sink`.
pub fn run<G, I>(
    generator: &G,
    stream: I,
    config: &SplitConfig,
    sink: &mut impl DatasetSink,
    reporter: &ProgressReporter,
) -> Result<SplitResult, EngineError>
where
    G: StructureGenerator,
    I: IntoIterator<Item = String>,
{
    let result = prepare(generator, stream, config, reporter)?;

    reporter.report(Progress::PhaseStart {
        name: "Writing datasets",
    });
    let (data, competition) = result.partition.clone().into_subsets();
    for (subset, name) in [(data, &config.data_name), (competition, &config.competition_name)] {
        let dataset = subset.to_dataset();
        sink.write(&dataset, name, config.indent)?;
        reporter.report(Progress::Message(format!(
            "Wrote '{}' ({} graphs)",
            name,
            dataset.len()
        )));
    }
    reporter.report(Progress::PhaseFinish);

    Ok(result)
}
