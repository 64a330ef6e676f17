// Configuration management for route-compare
// Supports CLI arguments, config file (TOML), and environment variables

use crate::error::{AppError, AppResult};
use crate::routes::{EntrySelection, InstanceFilter};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["route-compare.toml", "config.toml"];

/// RouteCompare for JunOS devices - compares 'show route | display xml' output
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "route-compare")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// pre XML file
    #[arg(long, env = "ROUTE_COMPARE_PRE")]
    pub pre: Option<PathBuf>,

    /// post XML file
    #[arg(long, env = "ROUTE_COMPARE_POST")]
    pub post: Option<PathBuf>,

    /// List of routing tables separated by a comma, or ALL [default: ALL]
    #[arg(long, env = "ROUTE_COMPARE_VRF")]
    pub vrf: Option<String>,

    /// on or off to write tables to files [default: off]
    #[arg(long, value_enum, env = "ROUTE_COMPARE_FILE_OUTPUT")]
    pub file_output: Option<FileOutput>,

    /// Directory for file output [default: .]
    #[arg(long, env = "ROUTE_COMPARE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format [default: table]
    #[arg(long, value_enum, env = "ROUTE_COMPARE_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Which rt-entry records to compare for each destination [default: active]
    #[arg(long, value_enum, env = "ROUTE_COMPARE_ENTRIES")]
    pub entries: Option<EntrySelection>,

    /// Logging level (error, warn, info, debug, trace) [default: warn]
    #[arg(short, long, env = "ROUTE_COMPARE_LOG")]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "ROUTE_COMPARE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Both snapshot paths, if given.
    pub fn snapshots(&self) -> Option<(PathBuf, PathBuf)> {
        Some((self.pre.clone()?, self.post.clone()?))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileOutput {
    On,
    #[default]
    Off,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Comparison settings
    #[serde(default)]
    pub compare: CompareConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Routing instances to compare, comma separated, or ALL
    #[serde(default = "default_vrf")]
    pub vrf: String,

    #[serde(default)]
    pub entries: EntrySelection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub file_output: FileOutput,

    #[serde(default)]
    pub format: OutputFormat,

    /// Directory the report files are written to
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_vrf() -> String {
    "ALL".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            vrf: default_vrf(),
            entries: EntrySelection::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            file_output: FileOutput::default(),
            format: OutputFormat::default(),
            directory: default_output_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl ConfigFile {
    /// Load the file named on the command line, or the first default
    /// location that exists. No file at all yields the defaults.
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        for path in DEFAULT_CONFIG_PATHS.iter().map(Path::new) {
            if path.exists() {
                return Self::read(path);
            }
        }

        Ok(ConfigFile::default())
    }

    fn read(path: &Path) -> AppResult<Self> {
        tracing::info!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub pre: PathBuf,
    pub post: PathBuf,
    pub filter: InstanceFilter,
    pub entries: EntrySelection,
    pub file_output: FileOutput,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
}

impl Config {
    /// Merge CLI args over the config file.
    /// Priority: CLI args (or their environment variables) > Config file > Defaults
    pub fn merge(cli: &CliArgs, file: ConfigFile) -> AppResult<Self> {
        let (pre, post) = cli
            .snapshots()
            .ok_or_else(|| AppError::Config("both --pre and --post are required".to_string()))?;

        let vrf = cli.vrf.clone().unwrap_or(file.compare.vrf);
        let filter = vrf.parse::<InstanceFilter>().map_err(AppError::Config)?;

        Ok(Config {
            pre,
            post,
            filter,
            entries: cli.entries.unwrap_or(file.compare.entries),
            file_output: cli.file_output.unwrap_or(file.output.file_output),
            format: cli.format.unwrap_or(file.output.format),
            output_dir: cli.output_dir.clone().unwrap_or(file.output.directory),
        })
    }
}

/// Log level from the command line, else the config file.
pub fn log_level(cli: &CliArgs, file: &ConfigFile) -> AppResult<Level> {
    parse_log_level(cli.log_level.as_deref().unwrap_or(&file.logging.level))
}

fn parse_log_level(level_str: &str) -> AppResult<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(AppError::Config(format!("Invalid log level: {}", level_str))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn cli_with_snapshots() -> CliArgs {
        CliArgs {
            pre: Some(PathBuf::from("pre.xml")),
            post: Some(PathBuf::from("post.xml")),
            ..CliArgs::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.compare.vrf, "ALL");
        assert_eq!(config.compare.entries, EntrySelection::Active);
        assert_eq!(config.output.file_output, FileOutput::Off);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("DEBUG"), Ok(Level::DEBUG)));
        assert!(parse_log_level("invalid").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = CliArgs::try_parse_from([
            "route-compare",
            "--pre",
            "a.xml",
            "--post",
            "b.xml",
            "--vrf",
            "inet.0,CUST-A.inet.0",
            "--file-output",
            "on",
        ])
        .unwrap();

        let config = Config::merge(&cli, ConfigFile::default()).unwrap();
        assert_eq!(config.pre, PathBuf::from("a.xml"));
        assert_eq!(config.post, PathBuf::from("b.xml"));
        assert_eq!(config.file_output, FileOutput::On);
        let names: BTreeSet<String> = ["inet.0", "CUST-A.inet.0"].map(String::from).into();
        assert_eq!(config.filter, InstanceFilter::Only(names));
    }

    #[test]
    fn test_file_output_rejects_other_values() {
        let parsed = CliArgs::try_parse_from(["route-compare", "--file-output", "maybe"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_snapshot_is_config_error() {
        let cli = CliArgs {
            pre: Some(PathBuf::from("pre.xml")),
            ..CliArgs::default()
        };
        assert!(cli.snapshots().is_none());
        assert!(matches!(
            Config::merge(&cli, ConfigFile::default()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            [compare]
            vrf = "inet.0"
            entries = "every"

            [output]
            format = "json"
            directory = "/tmp/reports"
            "#,
        )
        .unwrap();

        let mut cli = cli_with_snapshots();
        cli.format = Some(OutputFormat::Table);

        let config = Config::merge(&cli, file).unwrap();
        assert!(config.filter.includes("inet.0"));
        assert!(!config.filter.includes("inet6.0"));
        assert_eq!(config.entries, EntrySelection::Every);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.file_output, FileOutput::Off);
    }

    #[test]
    fn test_empty_vrf_is_rejected() {
        let mut cli = cli_with_snapshots();
        cli.vrf = Some(",".to_string());
        assert!(matches!(
            Config::merge(&cli, ConfigFile::default()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_load_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route-compare.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let file = ConfigFile::load(Some(&path)).unwrap();
        assert_eq!(file.logging.level, "debug");
        assert!(matches!(
            log_level(&CliArgs::default(), &file),
            Ok(Level::DEBUG)
        ));
    }
}
