//! Run configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`RANDSTAT_*`)
//! 3. Config file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use clap::{Args, ValueEnum};
use randstat_core::{HistogramSpec, Variant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sample volumes generated when none are configured.
pub const DEFAULT_SIZES: [usize; 10] = [
    100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000, 5_000_000,
];

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 3359;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks, one per batch
    #[default]
    Table,
    /// A single JSON document
    Json,
}

/// Run configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Generator variant; prompted for when absent
    #[serde(
        deserialize_with = "deserialize_variant",
        skip_serializing_if = "Option::is_none"
    )]
    pub variant: Option<Variant>,
    /// Initial generator register
    pub seed: u64,
    /// Inclusive lower bound of generated values
    pub min_value: i32,
    /// Exclusive upper bound of generated values
    pub max_value: i32,
    /// Batch volumes, generated in order from one stream
    pub sizes: Vec<usize>,
    /// Histogram bucket width
    pub bucket_width: u32,
    /// Histogram bucket count
    pub bucket_count: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Report output format
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_variant<'de, D>(deserializer: D) -> Result<Option<Variant>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Variant::from_str(&s)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

impl Default for RunConfig {
    fn default() -> Self {
        let spec = HistogramSpec::default();
        Self {
            variant: None,
            seed: DEFAULT_SEED,
            min_value: 0,
            max_value: 10_000,
            sizes: DEFAULT_SIZES.to_vec(),
            bucket_width: spec.bucket_width,
            bucket_count: spec.bucket_count,
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
        }
    }
}

/// CLI overrides for the run command
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Generator variant (xor-shift | linear-congruential, or 1 | 2)
    #[arg(short = 'g', long)]
    pub variant: Option<Variant>,

    /// Generator seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Inclusive lower bound of generated values
    #[arg(long = "min")]
    pub min_value: Option<i32>,

    /// Exclusive upper bound of generated values
    #[arg(long = "max")]
    pub max_value: Option<i32>,

    /// Comma-separated batch volumes
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Histogram bucket width
    #[arg(long)]
    pub bucket_width: Option<u32>,

    /// Histogram bucket count
    #[arg(long)]
    pub bucket_count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file if it exists
    pub fn from_optional_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }

    /// Apply `RANDSTAT_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(variant) = lookup("RANDSTAT_VARIANT") {
            self.variant = Some(parse_value("RANDSTAT_VARIANT", &variant)?);
        }

        if let Some(seed) = lookup("RANDSTAT_SEED") {
            self.seed = parse_value("RANDSTAT_SEED", &seed)?;
        }

        if let Some(min_value) = lookup("RANDSTAT_MIN") {
            self.min_value = parse_value("RANDSTAT_MIN", &min_value)?;
        }

        if let Some(max_value) = lookup("RANDSTAT_MAX") {
            self.max_value = parse_value("RANDSTAT_MAX", &max_value)?;
        }

        if let Some(sizes) = lookup("RANDSTAT_SIZES") {
            self.sizes = sizes
                .split(',')
                .map(|s| parse_value("RANDSTAT_SIZES", s.trim()))
                .collect::<Result<_, _>>()?;
        }

        if let Some(log_level) = lookup("RANDSTAT_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, args: &RunArgs) {
        if let Some(variant) = args.variant {
            self.variant = Some(variant);
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(min_value) = args.min_value {
            self.min_value = min_value;
        }
        if let Some(max_value) = args.max_value {
            self.max_value = max_value;
        }
        if let Some(sizes) = &args.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(bucket_width) = args.bucket_width {
            self.bucket_width = bucket_width;
        }
        if let Some(bucket_count) = args.bucket_count {
            self.bucket_count = bucket_count;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.min_value >= self.max_value {
            errors.push(format!(
                "min_value {} must be less than max_value {}",
                self.min_value, self.max_value
            ));
        }

        if self.sizes.is_empty() {
            errors.push("sizes cannot be empty".to_string());
        }
        if self.sizes.contains(&0) {
            errors.push("sizes must all be greater than 0".to_string());
        }

        if self.min_value < 0 {
            errors.push(format!(
                "min_value {} must not be negative: the histogram starts at 0",
                self.min_value
            ));
        }

        let spec = self.histogram_spec();
        match spec.validate() {
            Err(e) => errors.push(e.to_string()),
            Ok(()) if i64::from(self.max_value) > spec.upper_bound() as i64 => {
                errors.push(format!(
                    "max_value {} exceeds the histogram domain [0, {}): raise bucket_width or bucket_count",
                    self.max_value,
                    spec.upper_bound()
                ));
            }
            Ok(()) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Histogram layout described by this configuration
    pub fn histogram_spec(&self) -> HistogramSpec {
        HistogramSpec::new(self.bucket_width, self.bucket_count)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Build configuration from all sources
///
/// Returns the configuration and whether the config file was found.
pub fn build_config(path: &Path, args: Option<&RunArgs>) -> Result<(RunConfig, bool), ConfigError> {
    let file_config = RunConfig::from_optional_file(path)?;
    let found = file_config.is_some();

    let mut config = file_config.unwrap_or_default().with_env_override()?;
    if let Some(args) = args {
        config.merge_with_cli(args);
    }

    config.validate()?;
    Ok((config, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.variant, None);
        assert_eq!(config.seed, 3359);
        assert_eq!(config.min_value, 0);
        assert_eq!(config.max_value, 10_000);
        assert_eq!(config.sizes.len(), 10);
        assert_eq!(config.sizes[9], 5_000_000);
        assert_eq!(config.histogram_spec(), HistogramSpec::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert!(matches!(
            LogLevel::from_str("verbose"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
variant = "lcg"
seed = 42
sizes = [10, 20]
log_level = "warn"
format = "json"
"#
        )
        .unwrap();

        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.variant, Some(Variant::LinearCongruential));
        assert_eq!(config.seed, 42);
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Json);
        // Unset keys keep their defaults
        assert_eq!(config.max_value, 10_000);
        assert_eq!(config.bucket_count, 10);
    }

    #[test]
    fn test_from_file_rejects_unknown_variant() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"variant = "mersenne""#).unwrap();

        assert!(matches!(
            RunConfig::from_file(file.path()),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_example_config_parses() {
        let config: RunConfig = toml::from_str(include_str!("../randstat.example.toml")).unwrap();
        assert_eq!(config.variant, Some(Variant::LinearCongruential));
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_optional_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(RunConfig::from_optional_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = RunConfig::default()
            .with_overrides_from(lookup(&[
                ("RANDSTAT_VARIANT", "xor-shift"),
                ("RANDSTAT_SEED", "7"),
                ("RANDSTAT_MIN", "-10"),
                ("RANDSTAT_MAX", "10"),
                ("RANDSTAT_SIZES", "5, 15"),
                ("RANDSTAT_LOG_LEVEL", "trace"),
            ]))
            .unwrap();

        assert_eq!(config.variant, Some(Variant::XorShift));
        assert_eq!(config.seed, 7);
        assert_eq!(config.min_value, -10);
        assert_eq!(config.max_value, 10);
        assert_eq!(config.sizes, vec![5, 15]);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_env_override_invalid_number() {
        let result = RunConfig::default().with_overrides_from(lookup(&[("RANDSTAT_SEED", "-1")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "RANDSTAT_SEED",
                ..
            })
        ));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = RunConfig::default()
            .with_overrides_from(lookup(&[("RANDSTAT_SEED", "7")]))
            .unwrap();
        config.merge_with_cli(&RunArgs {
            seed: Some(99),
            format: Some(OutputFormat::Json),
            ..RunArgs::default()
        });

        assert_eq!(config.seed, 99);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = RunConfig {
            min_value: 5,
            max_value: 5,
            sizes: vec![10, 0],
            bucket_width: 0,
            ..RunConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    fn validation_errors(config: &RunConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_bounds_past_histogram() {
        let config = RunConfig {
            max_value: 20_000,
            ..RunConfig::default()
        };

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("max_value 20000"));

        // Widening the layout makes the same bounds valid
        let config = RunConfig {
            bucket_width: 2000,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_accepts_exact_cover() {
        let config = RunConfig {
            min_value: 0,
            max_value: 10_000,
            ..RunConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_negative_min() {
        let config = RunConfig {
            min_value: -1,
            ..RunConfig::default()
        };

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("min_value -1"));
    }

    #[test]
    fn test_validation_rejects_oversized_layout() {
        let config = RunConfig {
            bucket_width: u32::MAX,
            bucket_count: 1 << 20,
            ..RunConfig::default()
        };

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Invalid histogram"));
    }

    #[test]
    fn test_build_config_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            variant: Some(Variant::LinearCongruential),
            sizes: Some(vec![100]),
            ..RunArgs::default()
        };

        let (config, found) = build_config(&dir.path().join("randstat.toml"), Some(&args)).unwrap();
        assert!(!found);
        assert_eq!(config.variant, Some(Variant::LinearCongruential));
        assert_eq!(config.sizes, vec![100]);
    }
}
