use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PoolLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Notation pool '{0}' contains no notations")]
    Empty(String),
}

#[derive(Debug, Deserialize)]
struct PoolRecord {
    notation: String,
}

/// A finite set of candidate notation strings from which curation streams are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationPool {
    notations: Vec<String>,
}

impl NotationPool {
    /// Loads a pool from disk.
    ///
    /// Files with a `.csv` extension are read as CSV with a `notation` column (other
    /// columns are ignored). Anything else is read as plain text, one notation per
    /// line, skipping blank lines and `#` comments.
    pub fn load(path: &Path) -> Result<Self, PoolLoadError> {
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let notations = if is_csv {
            Self::read_csv(path)?
        } else {
            Self::read_lines(path)?
        };

        if notations.is_empty() {
            return Err(PoolLoadError::Empty(path.to_string_lossy().to_string()));
        }
        debug!("Loaded {} notations from {:?}", notations.len(), path);
        Ok(Self { notations })
    }

    fn read_csv(path: &Path) -> Result<Vec<String>, PoolLoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| PoolLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut notations = Vec::new();
        for result in reader.deserialize::<PoolRecord>() {
            let record = result.map_err(|e| PoolLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            let notation = record.notation.trim();
            if !notation.is_empty() {
                notations.push(notation.to_string());
            }
        }
        Ok(notations)
    }

    fn read_lines(path: &Path) -> Result<Vec<String>, PoolLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PoolLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect())
    }

    /// Builds a pool from an in-memory list. Returns `None` if the list is empty.
    pub fn from_notations<I, S>(notations: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let notations: Vec<String> = notations.into_iter().map(Into::into).collect();
        (!notations.is_empty()).then_some(Self { notations })
    }

    pub fn len(&self) -> usize {
        self.notations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notations.is_empty()
    }

    pub fn notations(&self) -> &[String] {
        &self.notations
    }

    /// An endless stream drawing uniformly, with replacement, from the pool.
    ///
    /// The same seed always yields the same sequence.
    pub fn sampler(&self, seed: u64) -> NotationSampler<'_> {
        NotationSampler {
            pool: &self.notations,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Endless seeded stream over a [`NotationPool`]. Never returns `None`.
pub struct NotationSampler<'a> {
    pool: &'a [String],
    rng: StdRng,
}

impl Iterator for NotationSampler<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let index = self.rng.gen_range(0..self.pool.len());
        Some(self.pool[index].clone())
    }
}
