use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileReferenceConfig, FileSplitConfig};
use super::models::{AppConfig, SplitJob};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use molgraph::engine::config as core_config;
use tracing::debug;

pub fn build_config(cli: &Cli, defaults: &DefaultsConfig) -> Result<AppConfig> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    merge(cli, file_config, defaults)
}

fn merge(cli: &Cli, file_config: FileConfig, defaults: &DefaultsConfig) -> Result<AppConfig> {
    let catalog = cli
        .catalog
        .clone()
        .or(file_config.catalog)
        .unwrap_or_else(|| {
            debug!("No catalog given; using {:?}.", &defaults.catalog);
            defaults.catalog.clone()
        });
    let output_dir = cli
        .output_dir
        .clone()
        .or(file_config.output_dir)
        .unwrap_or_else(|| defaults.output_dir.clone());

    let reference_file = file_config.reference.unwrap_or_default();
    let reference = if reference_file.enabled.unwrap_or(true) {
        Some(merge_reference(reference_file, defaults)?)
    } else {
        debug!("Reference set disabled by configuration.");
        None
    };

    let split = match file_config.split {
        Some(split_file) if split_file.enabled.unwrap_or(true) => {
            Some(merge_split(cli, split_file, defaults)?)
        }
        _ => None,
    };

    Ok(AppConfig {
        catalog,
        output_dir,
        reference,
        split,
    })
}

fn merge_reference(
    file: FileReferenceConfig,
    defaults: &DefaultsConfig,
) -> Result<core_config::ReferenceConfig> {
    core_config::ReferenceConfigBuilder::new()
        .notations(
            file.notations
                .unwrap_or_else(|| defaults.reference_notations.clone()),
        )
        .name(file.name.unwrap_or_else(|| defaults.reference_name.clone()))
        .indent(Some(file.indent.unwrap_or(defaults.reference_indent)))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn merge_split(cli: &Cli, file: FileSplitConfig, defaults: &DefaultsConfig) -> Result<SplitJob> {
    let pool = file.pool.ok_or_else(|| {
        CliError::Config("the [split] table needs a 'pool' of candidate notations".to_string())
    })?;
    let seed = cli.seed.or(file.seed).ok_or_else(|| {
        CliError::Config("the split needs a seed; pass --seed or set 'seed' in [split]".to_string())
    })?;

    let mut builder = core_config::SplitConfigBuilder::new()
        .data_size(file.data_size.unwrap_or(defaults.data_size))
        .competition_size(file.competition_size.unwrap_or(defaults.competition_size))
        .seed(seed)
        .max_node_size(file.max_node_size.unwrap_or(defaults.max_node_size))
        .max_attempts(file.max_attempts)
        .indent(file.indent);
    if let Some(name) = file.data_name {
        builder = builder.data_name(name);
    }
    if let Some(name) = file.competition_name {
        builder = builder.competition_name(name);
    }
    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(SplitJob { pool, config })
}
