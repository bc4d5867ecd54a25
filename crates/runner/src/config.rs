//! Configuration loading for the runner
//!
//! Supports JSON configuration files for:
//! - Input panel and output locations
//! - Engine settings (rounding rule, price scale)
//! - Restricted-security exclusion
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::path::{Path, PathBuf};

use limitup_board::DEFAULT_MARKER;
use limitup_core::TradeDate;
use limitup_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

/// Root configuration for a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Panel file (`.csv` or `.json`)
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Directory receiving both reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Daily summary file name
    #[serde(default = "default_summary_file")]
    pub summary_file: String,

    /// Detailed event table file name
    #[serde(default = "default_events_file")]
    pub events_file: String,

    /// Prefix reports with a UTF-8 byte order mark (spreadsheet friendly)
    #[serde(default = "default_utf8_bom")]
    pub utf8_bom: bool,

    /// Restrict the scan to one trading day
    #[serde(default)]
    pub target_date: Option<TradeDate>,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub exclusion: ExclusionConfig,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("daily_bars.csv")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_summary_file() -> String {
    "daily_limit_statistics.csv".to_string()
}

fn default_events_file() -> String {
    "detailed_limit_stocks.csv".to_string()
}

fn default_utf8_bom() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_dir: default_output_dir(),
            summary_file: default_summary_file(),
            events_file: default_events_file(),
            utf8_bom: default_utf8_bom(),
            target_date: None,
            engine: EngineConfig::default(),
            exclusion: ExclusionConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the configuration for a command line: file (if any), then flags
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli)?;
        Ok(config)
    }

    /// Override fields with explicitly passed flags
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(input) = &cli.input {
            self.input_path = input.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(date) = &cli.date {
            let parsed = crate::loader::parse_trade_date(date)
                .ok_or_else(|| ConfigError::Invalid(format!("unrecognised date '{}'", date)))?;
            self.target_date = Some(parsed);
        }
        if let Some(kind) = &cli.exclusion {
            self.exclusion.kind = kind.clone();
        }
        if let Some(path) = &cli.restricted {
            self.exclusion.restricted_file = Some(path.clone());
        }
        if let Some(rounding) = cli.rounding {
            self.engine.rounding = rounding.into();
        }
        if cli.no_bom {
            self.utf8_bom = false;
        }
        Ok(())
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    pub fn events_path(&self) -> PathBuf {
        self.output_dir.join(&self.events_file)
    }
}

/// Restricted-security exclusion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Policy name: `none`, `list` or `marker`
    #[serde(default = "default_exclusion_kind")]
    pub kind: String,

    /// Substring flagging special treatment for the `marker` policy
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Restricted codes for the `list` policy
    #[serde(default)]
    pub restricted: Vec<String>,

    /// Extra restricted codes, one per line
    #[serde(default)]
    pub restricted_file: Option<PathBuf>,
}

fn default_exclusion_kind() -> String {
    "marker".to_string()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            kind: default_exclusion_kind(),
            marker: default_marker(),
            restricted: Vec::new(),
            restricted_file: None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
