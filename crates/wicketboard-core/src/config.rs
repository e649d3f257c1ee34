// Configuration loading and parsing (config/dashboard.toml).

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::tournament::TournamentLabels;
use crate::trend::TrendKey;

/// File name of the dashboard config inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dashboard config not found: {path} (run from the directory holding defaults/dashboard.toml)")]
    FileNotFound { path: PathBuf },

    #[error("cannot read dashboard config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to seed config/dashboard.toml from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataPaths,
    #[serde(default)]
    pub trends: TrendsConfig,
    /// Extra tournament key → label entries, merged over the built-in table.
    #[serde(default)]
    pub tournament_labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub batting: String,
    pub bowling: String,
}

/// Initial state of the team trends view.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsConfig {
    #[serde(default = "default_team_query")]
    pub team_query: String,
    #[serde(default = "default_true")]
    pub group_by_opponent: bool,
    /// Most rows plotted per trend chart.
    #[serde(default = "default_chart_points")]
    pub chart_points: usize,
}

fn default_team_query() -> String {
    "SUPREMOS".to_string()
}

fn default_true() -> bool {
    true
}

fn default_chart_points() -> usize {
    40
}

impl Default for TrendsConfig {
    fn default() -> Self {
        TrendsConfig {
            team_query: default_team_query(),
            group_by_opponent: true,
            chart_points: default_chart_points(),
        }
    }
}

impl TrendsConfig {
    pub fn trend_key(&self) -> TrendKey {
        if self.group_by_opponent {
            TrendKey::Opponent
        } else {
            TrendKey::Match
        }
    }
}

impl Config {
    /// Built-in tournament labels with this config's overrides applied.
    pub fn labels(&self) -> TournamentLabels {
        TournamentLabels::builtin().with_overrides(&self.tournament_labels)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/dashboard.toml` relative to `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text, &path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse config text without touching the filesystem. `path` is only used in
/// error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Seed `config/dashboard.toml` from `defaults/dashboard.toml` when the user
/// has no config yet. Returns the seeded path, or `None` when a config was
/// already there. An existing config is never overwritten.
pub fn seed_dashboard_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let default_file = base_dir.join("defaults").join(CONFIG_FILE);
    let config_dir = base_dir.join("config");
    let target = config_dir.join(CONFIG_FILE);

    if target.exists() {
        return Ok(None);
    }
    if !default_file.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither config/{CONFIG_FILE} nor defaults/{CONFIG_FILE} exists under {}",
                base_dir.display()
            ),
        });
    }

    let content = std::fs::read(&default_file).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("cannot read {}: {e}", default_file.display()),
    })?;
    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("cannot create {}: {e}", config_dir.display()),
    })?;

    // create_new: a config written between the check above and here wins.
    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(mut dest) => {
            std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                ConfigError::DefaultsCopyError {
                    message: format!("cannot write {}: {e}", target.display()),
                }
            })?;
            info!("Seeded {} from {}", target.display(), default_file.display());
            Ok(Some(target))
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(ConfigError::DefaultsCopyError {
            message: format!("cannot create {}: {e}", target.display()),
        }),
    }
}

/// Load `config/dashboard.toml` from the working directory, seeding it from
/// the shipped defaults on first run.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::Unreadable {
        path: PathBuf::from("."),
        source: e,
    })?;
    seed_dashboard_config(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let paths: &[(&str, &str)] = &[
        ("data.batting", &config.data.batting),
        ("data.bowling", &config.data.bowling),
    ];
    for (name, value) in paths {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if config.trends.chart_points == 0 {
        return Err(ConfigError::ValidationError {
            field: "trends.chart_points".into(),
            message: "must be > 0".into(),
        });
    }

    for (key, label) in &config.tournament_labels {
        if label.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: format!("tournament_labels.{key}"),
                message: "label must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
