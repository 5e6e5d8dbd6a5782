use crate::core::io::traits::DatasetSink;
use crate::core::models::corpus::Dataset;
use crate::core::structure::StructureGenerator;
use crate::core::structure::error::BuildError;
use crate::engine::builder::GraphBuilder;
use crate::engine::config::ReferenceConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

/// A notation from the reference list that could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNotation {
    pub notation: String,
    pub error: BuildError,
}

/// A curated reference set and its parameter-masked twin.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    /// Successfully built graphs, in input order.
    pub full: Dataset,
    /// The same keys in the same order, with every parameter record removed.
    pub masked: Dataset,
    pub skipped: Vec<SkippedNotation>,
}

/// Builds a graph for every notation in `notations`, skipping the ones that fail.
///
/// Failures are logged with the notation that caused them. No shuffling takes place:
/// the datasets follow the input order minus skipped notations.
#[instrument(skip_all, name = "reference_set", fields(notations = notations.len()))]
pub fn build<G: StructureGenerator>(
    generator: &G,
    notations: &[String],
    reporter: &ProgressReporter,
) -> ReferenceSet {
    let builder = GraphBuilder::new(generator);
    let mut full = Dataset::with_capacity(notations.len());
    let mut skipped = Vec::new();

    reporter.report(Progress::TaskStart {
        total_steps: notations.len() as u64,
    });
    for notation in notations {
        match builder.build(notation) {
            Ok(graph) => {
                full.insert(notation.clone(), graph);
            }
            Err(error) => {
                warn!(
                    notation = notation.as_str(),
                    kind = %error.kind(),
                    "Skipping reference notation: {}",
                    error.message()
                );
                skipped.push(SkippedNotation {
                    notation: notation.clone(),
                    error,
                });
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    let masked = full
        .iter()
        .map(|(notation, graph)| (notation.clone(), graph.masked()))
        .collect();

    info!(
        "Built {} of {} reference graphs ({} skipped).",
        full.len(),
        notations.len(),
        skipped.len()
    );
    ReferenceSet {
        full,
        masked,
        skipped,
    }
}

/// Builds the reference set and writes `<name>_set` and `<name>_masked` to `sink`.
pub fn run<G: StructureGenerator>(
    generator: &G,
    config: &ReferenceConfig,
    sink: &mut impl DatasetSink,
    reporter: &ProgressReporter,
) -> Result<ReferenceSet, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Building reference set",
    });
    let set = build(generator, &config.notations, reporter);
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Writing reference set",
    });
    for (dataset, name) in [(&set.full, config.full_name()), (&set.masked, config.masked_name())] {
        sink.write(dataset, &name, config.indent)?;
        reporter.report(Progress::Message(format!(
            "Wrote '{}' ({} graphs)",
            name,
            dataset.len()
        )));
    }
    reporter.report(Progress::PhaseFinish);

    Ok(set)
}
