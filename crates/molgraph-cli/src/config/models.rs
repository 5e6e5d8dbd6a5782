use molgraph::engine::config as core_config;
use std::path::PathBuf;

pub struct SplitJob {
    pub pool: PathBuf,
    pub config: core_config::SplitConfig,
}

/// Everything one invocation needs, after file, CLI and default values are merged.
pub struct AppConfig {
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
    pub reference: Option<core_config::ReferenceConfig>,
    pub split: Option<SplitJob>,
}
