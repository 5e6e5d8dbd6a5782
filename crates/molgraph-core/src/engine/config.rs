use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurationConfig {
    /// Number of graphs to accept.
    pub target_count: usize,
    /// Graphs with this many nodes or more are discarded.
    pub max_node_size: usize,
    /// Upper bound on stream draws. `None` keeps drawing until the target is met.
    pub max_attempts: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub data_size: usize,
    pub competition_size: usize,
    pub seed: u64,
    pub max_node_size: usize,
    pub max_attempts: Option<usize>,
    pub data_name: String,
    pub competition_name: String,
    pub indent: Option<usize>,
}

/// Mixed into the split seed to give notation sampling its own random stream.
const SAMPLING_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

impl SplitConfig {
    /// Seed for drawing candidates from a notation pool. It differs from [`seed`],
    /// which drives the partition shuffle, so the two never share a stream.
    ///
    /// [`seed`]: SplitConfig::seed
    pub fn sampling_seed(&self) -> u64 {
        self.seed ^ SAMPLING_SEED_SALT
    }

    pub fn curation(&self) -> CurationConfig {
        CurationConfig {
            target_count: self.data_size + self.competition_size,
            max_node_size: self.max_node_size,
            max_attempts: self.max_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    pub notations: Vec<String>,
    pub name: String,
    pub indent: Option<usize>,
}

impl ReferenceConfig {
    pub fn full_name(&self) -> String {
        format!("{}_set", self.name)
    }

    pub fn masked_name(&self) -> String {
        format!("{}_masked", self.name)
    }
}

#[derive(Default)]
pub struct SplitConfigBuilder {
    data_size: Option<usize>,
    competition_size: Option<usize>,
    seed: Option<u64>,
    max_node_size: Option<usize>,
    max_attempts: Option<usize>,
    data_name: Option<String>,
    competition_name: Option<String>,
    indent: Option<usize>,
}

impl SplitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_size(mut self, size: usize) -> Self {
        self.data_size = Some(size);
        self
    }
    pub fn competition_size(mut self, size: usize) -> Self {
        self.competition_size = Some(size);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn max_node_size(mut self, size: usize) -> Self {
        self.max_node_size = Some(size);
        self
    }
    pub fn max_attempts(mut self, attempts: Option<usize>) -> Self {
        self.max_attempts = attempts;
        self
    }
    pub fn data_name(mut self, name: impl Into<String>) -> Self {
        self.data_name = Some(name.into());
        self
    }
    pub fn competition_name(mut self, name: impl Into<String>) -> Self {
        self.competition_name = Some(name.into());
        self
    }
    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn build(self) -> Result<SplitConfig, ConfigError> {
        let config = SplitConfig {
            data_size: self
                .data_size
                .ok_or(ConfigError::MissingParameter("data_size"))?,
            competition_size: self
                .competition_size
                .ok_or(ConfigError::MissingParameter("competition_size"))?,
            seed: self.seed.ok_or(ConfigError::MissingParameter("seed"))?,
            max_node_size: self
                .max_node_size
                .ok_or(ConfigError::MissingParameter("max_node_size"))?,
            max_attempts: self.max_attempts,
            data_name: self.data_name.unwrap_or_else(|| "data".to_string()),
            competition_name: self
                .competition_name
                .unwrap_or_else(|| "competition".to_string()),
            indent: self.indent,
        };
        if config.max_node_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_node_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if config.data_name == config.competition_name {
            return Err(ConfigError::InvalidParameter {
                name: "competition_name",
                reason: format!("must differ from the data set name '{}'", config.data_name),
            });
        }
        Ok(config)
    }
}

#[derive(Default)]
pub struct ReferenceConfigBuilder {
    notations: Option<Vec<String>>,
    name: Option<String>,
    indent: Option<usize>,
}

impl ReferenceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notations<I, S>(mut self, notations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notations = Some(notations.into_iter().map(Into::into).collect());
        self
    }
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn build(self) -> Result<ReferenceConfig, ConfigError> {
        let name = self.name.ok_or(ConfigError::MissingParameter("name"))?;
        if name.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(ReferenceConfig {
            notations: self
                .notations
                .ok_or(ConfigError::MissingParameter("notations"))?,
            name,
            indent: self.indent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_builder_fills_default_names() {
        let config = SplitConfigBuilder::new()
            .data_size(3000)
            .competition_size(500)
            .seed(42)
            .max_node_size(100)
            .build()
            .unwrap();
        assert_eq!(config.data_name, "data");
        assert_eq!(config.competition_name, "competition");
        assert_eq!(config.indent, None);
        assert_eq!(
            config.curation(),
            CurationConfig {
                target_count: 3500,
                max_node_size: 100,
                max_attempts: None
            }
        );
    }

    #[test]
    fn sampling_seed_is_stable_and_distinct_from_the_partition_seed() {
        let build = |seed| {
            SplitConfigBuilder::new()
                .data_size(1)
                .competition_size(1)
                .seed(seed)
                .max_node_size(10)
                .build()
                .unwrap()
        };
        for seed in [0, 1, 42, u64::MAX] {
            let config = build(seed);
            assert_ne!(config.sampling_seed(), config.seed);
            assert_eq!(config.sampling_seed(), build(seed).sampling_seed());
        }
        assert_ne!(build(1).sampling_seed(), build(2).sampling_seed());
    }

    #[test]
    fn split_builder_rejects_zero_node_size() {
        let err = SplitConfigBuilder::new()
            .data_size(1)
            .competition_size(1)
            .seed(0)
            .max_node_size(0)
            .build();
        assert!(matches!(err, Err(ConfigError::InvalidParameter { name: "max_node_size", .. })));
    }

    #[test]
    fn split_builder_rejects_clashing_names() {
        let err = SplitConfigBuilder::new()
            .data_size(1)
            .competition_size(1)
            .seed(0)
            .max_node_size(10)
            .data_name("set")
            .competition_name("set")
            .build();
        assert!(matches!(err, Err(ConfigError::InvalidParameter { name: "competition_name", .. })));
    }

    #[test]
    fn split_builder_reports_missing_seed() {
        let err = SplitConfigBuilder::new()
            .data_size(1)
            .competition_size(1)
            .max_node_size(10)
            .build();
        assert_eq!(err, Err(ConfigError::MissingParameter("seed")));
    }

    #[test]
    fn reference_config_derives_artifact_names() {
        let config = ReferenceConfigBuilder::new()
            .notations(["C1CC1"])
            .name("josh")
            .indent(Some(2))
            .build()
            .unwrap();
        assert_eq!(config.full_name(), "josh_set");
        assert_eq!(config.masked_name(), "josh_masked");
    }

    #[test]
    fn reference_builder_requires_notations() {
        let err = ReferenceConfigBuilder::new().name("ref").build();
        assert_eq!(err, Err(ConfigError::MissingParameter("notations")));
    }
}
