use super::builder::GraphBuilder;
use super::config::CurationConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::corpus::Corpus;
use crate::core::structure::StructureGenerator;
use crate::core::structure::error::{BuildError, FailureKind};
use tracing::{info, instrument, trace, warn};

/// Counters collected while curating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurationStats {
    pub attempts: usize,
    pub accepted: usize,
    pub oversized: usize,
    pub structure_failures: usize,
    pub validation_failures: usize,
    pub forcefield_failures: usize,
}

impl CurationStats {
    pub fn failures(&self) -> usize {
        self.structure_failures + self.validation_failures + self.forcefield_failures
    }

    fn record_failure(&mut self, kind: FailureKind) {
        match kind {
            FailureKind::Structure => self.structure_failures += 1,
            FailureKind::Validation => self.validation_failures += 1,
            FailureKind::ForceFieldAssignment => self.forcefield_failures += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurationOutcome {
    pub corpus: Corpus,
    pub stats: CurationStats,
}

/// Rejection-sampling loop that accumulates valid, size-bounded graphs.
pub struct CorpusCurator<'a, G: StructureGenerator> {
    builder: GraphBuilder<'a, G>,
    config: CurationConfig,
    reporter: &'a ProgressReporter<'a>,
}

impl<'a, G: StructureGenerator> CorpusCurator<'a, G> {
    pub fn new(
        generator: &'a G,
        config: CurationConfig,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            builder: GraphBuilder::new(generator),
            config,
            reporter,
        }
    }

    /// Draws notations from `stream` until `target_count` graphs have been accepted.
    ///
    /// Candidates that fail to build are logged with the current progress and skipped.
    /// Graphs with `max_node_size` nodes or more are dropped without a warning. The
    /// returned corpus holds exactly `target_count` entries in acceptance order.
    ///
    /// Without `max_attempts` the loop has no bound: a stream that cannot supply
    /// enough valid, small-enough structures keeps it running indefinitely.
    ///
    /// # Errors
    ///
    /// * [`EngineError::AttemptsExhausted`] - `max_attempts` draws were made first.
    /// * [`EngineError::StreamExhausted`] - the stream ended first.
    #[instrument(skip_all, name = "curation", fields(target = self.config.target_count))]
    pub fn curate<I>(&self, stream: I) -> Result<CurationOutcome, EngineError>
    where
        I: IntoIterator<Item = String>,
    {
        let target = self.config.target_count;
        let mut corpus = Corpus::new();
        let mut stats = CurationStats::default();

        match self.config.max_attempts {
            Some(limit) => info!(
                "Curating {} graphs below {} nodes (at most {} attempts).",
                target, self.config.max_node_size, limit
            ),
            None => info!(
                "Curating {} graphs below {} nodes with no attempt limit.",
                target, self.config.max_node_size
            ),
        }

        self.reporter.report(Progress::TaskStart {
            total_steps: target as u64,
        });

        let mut stream = stream.into_iter();
        while stats.accepted < target {
            if self
                .config
                .max_attempts
                .is_some_and(|limit| stats.attempts >= limit)
            {
                return Err(EngineError::AttemptsExhausted {
                    attempts: stats.attempts,
                    accepted: stats.accepted,
                    target,
                });
            }

            let Some(notation) = stream.next() else {
                return Err(EngineError::StreamExhausted {
                    attempts: stats.attempts,
                    accepted: stats.accepted,
                    target,
                });
            };
            stats.attempts += 1;

            let graph = match self.builder.build(&notation) {
                Ok(graph) => graph,
                Err(err) => {
                    stats.record_failure(err.kind());
                    log_failure(&notation, stats.accepted as f64 / target as f64, &err);
                    continue;
                }
            };

            if graph.node_count() >= self.config.max_node_size {
                stats.oversized += 1;
                trace!(
                    notation = notation.as_str(),
                    nodes = graph.node_count(),
                    "Discarding oversized graph"
                );
                continue;
            }

            corpus.push(notation, graph);
            stats.accepted += 1;
            self.reporter.report(Progress::TaskIncrement);
        }

        self.reporter.report(Progress::TaskFinish);
        info!(
            "Accepted {} graphs after {} attempts ({} failed, {} oversized).",
            stats.accepted,
            stats.attempts,
            stats.failures(),
            stats.oversized
        );
        Ok(CurationOutcome { corpus, stats })
    }
}

fn log_failure(notation: &str, progress: f64, err: &BuildError) {
    warn!(
        notation,
        kind = %err.kind(),
        progress,
        "Skipping candidate: {}",
        err.message()
    );
}
