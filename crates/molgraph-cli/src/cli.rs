use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "molgraph CLI - Prepares attributed molecular graph datasets: a fixed reference set with its parameter-masked twin, and seeded data/competition splits.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the structure catalog that supplies typed molecules.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Override the directory the datasets are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override the seed of the data/competition split.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_with_no_arguments() {
        let cli = Cli::try_parse_from(["molgraph"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.catalog.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        let err = Cli::try_parse_from(["molgraph", "C1CC1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn named_overrides_are_parsed() {
        let cli = Cli::try_parse_from([
            "molgraph",
            "-c",
            "run.toml",
            "--catalog",
            "catalog.toml",
            "-o",
            "out",
            "--seed",
            "42",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("run.toml")));
        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.toml")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["molgraph", "-q", "-v"]).is_err());
    }
}
