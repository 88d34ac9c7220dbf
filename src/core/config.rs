//! # Client Configuration
//!
//! Settings that bind a client to a concrete external tool: which program to
//! spawn and where. They are read from `~/.config/atlas-client/config.toml`
//! when present and otherwise fall back to invoking `atlas` from the current
//! directory.
//!
//! ```toml
//! entrypoint = "~/.local/bin/atlas"
//! working_dir = "$HOME/projects/db"
//! dev_url = "docker://postgres/15/dev"
//! format = "json"
//! ```

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, DEFAULT_ENTRYPOINT},
    models::Format,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while locating or reading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not read config file at '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML file at '{path}': {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Could not expand '{value}': {source}")]
    Expand {
        value: String,
        #[source]
        source: shellexpand::LookupError<std::env::VarError>,
    },
}

/// How a client reaches the external tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Program spawned for every operation. Defaults to `atlas` on `PATH`.
    pub entrypoint: String,
    /// Working directory of the spawned process. Inherited when `None`.
    pub working_dir: Option<PathBuf>,
    /// Dev database used by the CLI when `--dev-url` is not given.
    pub dev_url: Option<String>,
    /// Output format used by the CLI when `--format` is not given.
    pub format: Option<Format>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            working_dir: None,
            dev_url: None,
            format: None,
        }
    }
}

impl ClientConfig {
    /// A configuration spawning `entrypoint` with every other setting unset.
    pub fn new(entrypoint: impl Into<String>) -> Self {
        Self {
            entrypoint: entrypoint.into(),
            ..Default::default()
        }
    }

    /// Sets the working directory of the spawned process.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Reads and parses the config file at `path`, expanding `~` and
    /// environment variables in `entrypoint` and `working_dir`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading client config from '{}'", path.display());
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.expanded()
    }

    /// Like [`ClientConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config at '{}', using defaults.", path.display());
            Ok(Self::default())
        }
    }

    /// Loads the user's config file, `~/.config/atlas-client/config.toml`.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_default(&default_config_path()?)
    }

    fn expanded(mut self) -> Result<Self, ConfigError> {
        self.entrypoint = expand(&self.entrypoint)?;
        if let Some(dir) = &self.working_dir {
            let raw = dir.to_string_lossy();
            self.working_dir = Some(PathBuf::from(expand(&raw)?));
        }
        Ok(self)
    }
}

/// Path of the user's config file. The file itself may not exist.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

fn expand(value: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(|expanded| expanded.into_owned())
        .map_err(|e| ConfigError::Expand {
            value: value.to_string(),
            source: e,
        })
}
