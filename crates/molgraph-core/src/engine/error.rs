use crate::core::io::traits::SinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Curation gave up after {attempts} attempts with {accepted} of {target} graphs accepted"
    )]
    AttemptsExhausted {
        attempts: usize,
        accepted: usize,
        target: usize,
    },

    #[error("Notation stream ended after {attempts} draws with {accepted} of {target} graphs accepted")]
    StreamExhausted {
        attempts: usize,
        accepted: usize,
        target: usize,
    },

    #[error(
        "Partition sizes {data} + {competition} do not add up to the corpus size {corpus}"
    )]
    PartitionSize {
        data: usize,
        competition: usize,
        corpus: usize,
    },

    #[error("Failed to persist dataset: {source}")]
    Sink {
        #[from]
        source: SinkError,
    },
}
