use super::traits::{DatasetSink, SinkError};
use crate::core::models::corpus::Dataset;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes each dataset to `<directory>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonDatasetWriter {
    directory: PathBuf,
}

impl JsonDatasetWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file a dataset called `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.json", name))
    }
}

/// Renders `dataset` as JSON into `writer`.
///
/// With `indent = Some(n)` the output is pretty-printed with `n` spaces per level;
/// with `None` it is compact.
pub fn write_json<W: Write>(
    dataset: &Dataset,
    writer: W,
    indent: Option<usize>,
) -> Result<(), serde_json::Error> {
    match indent {
        Some(width) => {
            let spaces = vec![b' '; width];
            let formatter = PrettyFormatter::with_indent(&spaces);
            let mut serializer = Serializer::with_formatter(writer, formatter);
            dataset.serialize(&mut serializer)
        }
        None => {
            let mut serializer = Serializer::new(writer);
            dataset.serialize(&mut serializer)
        }
    }
}

impl DatasetSink for JsonDatasetWriter {
    fn write(
        &mut self,
        dataset: &Dataset,
        name: &str,
        indent: Option<usize>,
    ) -> Result<(), SinkError> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(SinkError::InvalidName(name.to_string()));
        }

        let io_err = |source| SinkError::Io {
            name: name.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.directory).map_err(io_err)?;
        let path = self.path_for(name);
        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        write_json(dataset, &mut writer, indent).map_err(|source| SinkError::Serialize {
            name: name.to_string(),
            source,
        })?;
        writer.flush().map_err(io_err)?;

        info!(
            "Wrote dataset '{}' ({} entries) to {:?}",
            name,
            dataset.len(),
            path
        );
        Ok(())
    }
}
