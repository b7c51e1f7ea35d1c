//! Law checking runner
//!
//! This module provides the `check-laws` subcommand, which runs the standard
//! set laws through the seeded property harness and reports the outcome.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use eqset::harness::HarnessConfig;
use eqset::harness::laws::{SuiteReport, standard_suite};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Arguments for the check-laws subcommand
#[derive(Args, Debug)]
pub struct CheckLawsArgs {
    /// Seed of the pseudo-random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of generated sets per law
    #[arg(long)]
    pub cases: Option<usize>,

    /// Upper bound on fresh elements added per generation step
    #[arg(long)]
    pub max_growth: Option<usize>,

    /// Harness configuration YAML file [default: harness.yaml, skipped if missing]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary on stderr
    Text,
    /// Suite report as JSON on stdout
    Json,
}

/// Config file read when `--config` is not given, relative to the project root.
const DEFAULT_CONFIG_FILE: &str = "harness.yaml";

/// Harness settings read from the YAML file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    seed: Option<u64>,
    cases: Option<usize>,
    max_growth: Option<usize>,
}

/// Reads a numeric override from the environment.
fn env_value<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {name}: {value:?}")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(error).with_context(|| format!("Could not read {name}")),
    }
}

/// Loads the configuration file.
///
/// A missing file is only an error when it was named explicitly.
fn load_file_config(path: &Path, explicit: bool) -> Result<FileConfig> {
    if !path.exists() {
        if explicit {
            bail!("Harness config file not found: {}", path.display());
        }
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content).context("Failed to parse harness config YAML")
}

/// Returns the config file path and whether it was named on the command line.
fn config_location(args: &CheckLawsArgs, root: &Path) -> (PathBuf, bool) {
    let (path, explicit) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if path.is_absolute() {
        (path, explicit)
    } else {
        (root.join(path), explicit)
    }
}

/// Resolves the harness configuration.
///
/// Priority: CLI > Environment > Config file > Default
fn resolve_config(args: &CheckLawsArgs, file: &FileConfig) -> Result<HarnessConfig> {
    let defaults = HarnessConfig::default();

    let seed = match args.seed {
        Some(seed) => seed,
        None => env_value("EQSET_SEED")?
            .or(file.seed)
            .unwrap_or(defaults.seed),
    };

    let cases = match args.cases {
        Some(cases) => cases,
        None => env_value("EQSET_CASES")?
            .or(file.cases)
            .unwrap_or(defaults.cases),
    };

    let max_growth = match args.max_growth {
        Some(max_growth) => max_growth,
        None => env_value("EQSET_MAX_GROWTH")?
            .or(file.max_growth)
            .unwrap_or(defaults.max_growth),
    };

    if max_growth == 0 {
        bail!("max_growth must be at least 1");
    }

    Ok(defaults
        .with_seed(seed)
        .with_cases(cases)
        .with_max_growth(max_growth))
}

/// Get the project root directory
fn project_root() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // xtask is in project_root/xtask, so go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map_or_else(|| manifest_dir.clone(), Path::to_path_buf)
    } else {
        manifest_dir
    }
}

fn print_summary(config_path: &Path, report: &SuiteReport) {
    eprintln!("==============================================");
    eprintln!("  EqSet Law Checker (xtask)");
    eprintln!("==============================================");
    eprintln!();
    eprintln!("Configuration:");
    eprintln!("  Config File:    {}", config_path.display());
    eprintln!("  Seed:           {}", report.config.seed);
    eprintln!("  Cases:          {}", report.config.cases);
    eprintln!("  Max Growth:     {}", report.config.max_growth);
    eprintln!();

    for law in &report.reports {
        let status = if law.is_success() { "ok" } else { "FAILED" };
        eprintln!("  {:<40} {:>6} ({} cases)", law.property, status, law.cases_run);
    }

    let passed = report
        .reports
        .iter()
        .filter(|law| law.is_success())
        .count();

    eprintln!();
    eprintln!("==============================================");
    eprintln!("  {passed}/{} laws held", report.reports.len());
    eprintln!("==============================================");
    eprintln!();
}

/// Main entry point for check-laws command
pub fn run(args: CheckLawsArgs) -> Result<()> {
    let root = project_root();

    let (config_path, explicit) = config_location(&args, &root);
    let file = load_file_config(&config_path, explicit)?;
    let config = resolve_config(&args, &file)?;
    let report = standard_suite(&config);

    match args.format {
        OutputFormat::Text => print_summary(&config_path, &report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize suite report")?;
            println!("{json}");
        }
    }

    if let Some(failure) = report.first_failure() {
        bail!("{failure}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(seed: Option<u64>, cases: Option<usize>, max_growth: Option<usize>) -> CheckLawsArgs {
        CheckLawsArgs {
            seed,
            cases,
            max_growth,
            config: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn cli_overrides_file() {
        let file = FileConfig {
            seed: Some(1),
            cases: Some(2),
            max_growth: Some(3),
        };
        let config = resolve_config(&args(Some(9), Some(8), Some(7)), &file).unwrap();

        assert_eq!(config, HarnessConfig::default().with_seed(9).with_cases(8).with_max_growth(7));
    }

    #[test]
    fn file_fills_missing_arguments() {
        let file: FileConfig = serde_yaml::from_str("cases: 12\nmax_growth: 2\n").unwrap();
        let config = resolve_config(&args(Some(5), None, None), &file).unwrap();

        assert_eq!(config.seed, 5);
        assert_eq!(config.cases, 12);
        assert_eq!(config.max_growth, 2);
    }

    #[test]
    fn zero_growth_is_rejected() {
        let result = resolve_config(&args(Some(1), Some(1), Some(0)), &FileConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let result: Result<FileConfig, _> = serde_yaml::from_str("seeds: 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_default_name_is_still_explicit() {
        let root = Path::new("/nonexistent");

        let (path, explicit) = config_location(&args(None, None, None), root);
        assert_eq!(path, root.join("harness.yaml"));
        assert!(!explicit);

        let named = CheckLawsArgs {
            config: Some(PathBuf::from("harness.yaml")),
            ..args(None, None, None)
        };
        let (path, explicit) = config_location(&named, root);
        assert_eq!(path, root.join("harness.yaml"));
        assert!(explicit);
        assert!(load_file_config(&path, explicit).is_err());
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let file = load_file_config(Path::new("/nonexistent/harness.yaml"), false).unwrap();
        assert!(file.seed.is_none());
        assert!(load_file_config(Path::new("/nonexistent/harness.yaml"), true).is_err());
    }
}
