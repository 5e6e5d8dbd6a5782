use crate::core::models::corpus::Dataset;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error while writing dataset '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize dataset '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid dataset name '{0}'")]
    InvalidName(String),
}

/// Destination for named datasets.
///
/// Implementors decide where a dataset called `name` ends up; callers only choose the
/// name and the indentation of the rendered output.
pub trait DatasetSink {
    /// Persists `dataset` under `name`.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The notation → graph mapping to persist.
    /// * `name` - The artifact name, without extension.
    /// * `indent` - Number of spaces per nesting level, or `None` for compact output.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if the dataset cannot be rendered or stored.
    fn write(&mut self, dataset: &Dataset, name: &str, indent: Option<usize>)
    -> Result<(), SinkError>;
}
