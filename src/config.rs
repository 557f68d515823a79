// rc-file configuration (~/.gymdesk/rc)
//
// Same `key=value` format as the rest of the toolchain's rc files:
// blank lines and `#` comments are ignored, unknown keys are skipped.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::pipeline::{PipelineError, Thresholds};

pub const DEFAULT_MEMBER_COUNT: usize = 48;
pub const DEFAULT_LEAD_COUNT: usize = 36;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config line {line}: expected key=value, got '{text}'")]
    MalformedLine { line: usize, text: String },

    #[error("config line {line}: invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" => Some(ColorMode::Always),
            "never" | "off" => Some(ColorMode::Never),
            _ => None,
        }
    }

    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory with JSON files that replace built-in or synthesized data
    pub data_location: Option<PathBuf>,
    /// Anchor date for mock data; the local date when unset
    pub today: Option<NaiveDate>,
    pub member_count: usize,
    pub lead_count: usize,
    /// Stage id -> thresholds replacing the built-in ones
    pub thresholds: BTreeMap<String, Thresholds>,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_location: None,
            today: None,
            member_count: DEFAULT_MEMBER_COUNT,
            lead_count: DEFAULT_LEAD_COUNT,
            thresholds: BTreeMap::new(),
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// `$HOME/.gymdesk`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gymdesk")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("rc")
    }

    /// Load the rc file, or defaults when it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        log::debug!("Loading config from {}", path.display());
        Self::parse(&content, base_dir)
    }

    /// Parse rc content; relative `data.location` resolves against `base_dir`
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::MalformedLine { line: line_no, text: line.to_string() });
            };
            let key = key.trim();
            let value = value.trim();
            let invalid = |reason: &str| ConfigError::InvalidValue {
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
                reason: reason.to_string(),
            };

            match key {
                "data.location" => {
                    let path = PathBuf::from(value);
                    config.data_location = Some(if path.is_relative() {
                        base_dir.join(path)
                    } else {
                        path
                    });
                }
                "mock.today" => {
                    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .map_err(|_| invalid("expected YYYY-MM-DD"))?;
                    config.today = Some(date);
                }
                "mock.members" => {
                    config.member_count = value.parse().map_err(|_| invalid("expected a count"))?;
                }
                "mock.leads" => {
                    config.lead_count = value.parse().map_err(|_| invalid("expected a count"))?;
                }
                "color" => {
                    config.color = ColorMode::from_str(value).ok_or_else(|| invalid("expected auto, always, or never"))?;
                }
                _ => {
                    if let Some(stage) = key.strip_prefix("pipeline.").and_then(|k| k.strip_suffix(".thresholds")) {
                        let thresholds = parse_thresholds(value).map_err(|reason| invalid(&reason))?;
                        config.thresholds.insert(stage.to_string(), thresholds);
                    } else {
                        log::debug!("Ignoring unknown config key '{}' on line {}", key, line_no);
                    }
                }
            }
        }

        Ok(config)
    }
}

/// Parse `fresh,aging`
fn parse_thresholds(value: &str) -> Result<Thresholds, String> {
    let Some((fresh, aging)) = value.split_once(',') else {
        return Err("expected two day counts, e.g. 7,14".to_string());
    };
    let fresh: u32 = fresh.trim().parse().map_err(|_| format!("'{}' is not a day count", fresh.trim()))?;
    let aging: u32 = aging.trim().parse().map_err(|_| format!("'{}' is not a day count", aging.trim()))?;
    Thresholds::new(fresh, aging).map_err(|e: PipelineError| e.to_string())
}
