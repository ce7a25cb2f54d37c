use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::collector::{Backend, CollectOptions, DEFAULT_ARGS, DEFAULT_PROGRAM};
use crate::error::{ConfigError, Result};
use crate::report::{PathMode, TableOptions};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub collector: CollectorConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Size source: du, native
    pub backend: Backend,
    /// Disk-usage program for the du backend
    pub command: String,
    /// Arguments passed before the root path
    pub args: Vec<String>,
    /// Run the command through sudo
    pub sudo: bool,
    /// Report apparent sizes instead of disk usage
    pub apparent_size: bool,
    /// Don't cross filesystem boundaries
    pub one_file_system: bool,
    /// Native walker threads (0 = auto)
    pub threads: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How paths are read from command output: remainder, first-token
    pub path_mode: PathMode,
    /// Maximum width of the rank column
    pub index_width: u16,
    /// Maximum width of the size column
    pub size_width: u16,
    /// Maximum width of the path column
    pub path_width: u16,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Du,
            command: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            sudo: false,
            apparent_size: false,
            one_file_system: false,
            threads: 0,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path_mode: PathMode::Remainder,
            index_width: 5,
            size_width: 20,
            path_width: 50,
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/largest-dirs/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("largest-dirs").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.collector.command.trim().is_empty() {
            return Err(ConfigError::Invalid("collector.command must not be empty".into()).into());
        }

        for (name, width) in [
            ("index_width", self.report.index_width),
            ("size_width", self.report.size_width),
            ("path_width", self.report.path_width),
        ] {
            if width == 0 {
                return Err(ConfigError::Invalid(format!("{} must be at least 1", name)).into());
            }
        }

        Ok(())
    }

    /// Collector options described by this configuration
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions::new()
            .with_command(self.collector.command.clone(), self.collector.args.clone())
            .with_sudo(self.collector.sudo)
            .with_path_mode(self.report.path_mode)
            .with_apparent_size(self.collector.apparent_size)
            .with_one_file_system(self.collector.one_file_system)
            .with_threads(self.collector.threads)
    }

    /// Table options for `limit` rows
    pub fn table_options(&self, limit: usize) -> TableOptions {
        TableOptions::new().with_limit(limit).with_widths(
            self.report.index_width,
            self.report.size_width,
            self.report.path_width,
        )
    }
}
