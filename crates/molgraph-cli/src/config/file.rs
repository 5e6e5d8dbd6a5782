use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileReferenceConfig {
    pub enabled: Option<bool>,
    pub name: Option<String>,
    pub indent: Option<usize>,
    pub notations: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSplitConfig {
    pub enabled: Option<bool>,
    pub pool: Option<PathBuf>,
    pub data_size: Option<usize>,
    pub competition_size: Option<usize>,
    pub seed: Option<u64>,
    pub max_node_size: Option<usize>,
    pub max_attempts: Option<usize>,
    pub data_name: Option<String>,
    pub competition_name: Option<String>,
    pub indent: Option<usize>,
}

/// The run configuration as written in TOML.
///
/// Relative paths are resolved against the directory of the file they were read
/// from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub catalog: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub reference: Option<FileReferenceConfig>,
    pub split: Option<FileSplitConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        self.catalog = self.catalog.map(resolve);
        self.output_dir = self.output_dir.map(resolve);
        if let Some(split) = self.split.as_mut() {
            split.pool = split.pool.take().map(resolve);
        }
        self
    }
}
