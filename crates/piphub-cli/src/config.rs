//! CLI configuration — read/write `~/.piphub`.

use std::path::{Path, PathBuf};

use piphub_core::protocol::Protocol;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "PIPHUB_CONFIG";

/// Environment variable set inside an active virtualenv.
pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";

/// Errors that can occur while loading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but is not valid JSON for a config.
    #[error("invalid config file {}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Directory holding the checkouts (pip's `--src`).
    pub src: PathBuf,
    /// Installer executable.
    pub pip: String,
    /// Transport used in `git+<protocol>://` URLs.
    pub protocol: Protocol,
    /// Whether to pass `--user` to pip.
    pub user: bool,
}

/// The persisted file, where every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    src: Option<PathBuf>,
    pip: Option<String>,
    protocol: Option<Protocol>,
    user: Option<bool>,
}

/// Per-run settings taken from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--user` (`Some(true)`) or `--no-user` (`Some(false)`).
    pub user: Option<bool>,
    /// `--src <path>`.
    pub src: Option<PathBuf>,
}

impl Config {
    /// Built-in defaults for a given home directory.
    ///
    /// `user` is on unless running inside a virtualenv.
    #[must_use]
    pub fn defaults(home: &Path, in_virtualenv: bool) -> Self {
        Self {
            src: home.join("dev").join("py"),
            pip: "pip".to_owned(),
            protocol: Protocol::Https,
            user: !in_virtualenv,
        }
    }

    /// Built-in defaults derived from `$HOME` and `$VIRTUAL_ENV`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::defaults(&home_dir(), std::env::var_os(VIRTUAL_ENV).is_some())
    }

    /// Apply command-line overrides on top of this config.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(user) = overrides.user {
            self.user = user;
        }
        if let Some(src) = &overrides.src {
            self.src.clone_from(src);
        }
    }

    fn merge(&mut self, file: ConfigFile) {
        if let Some(src) = file.src {
            self.src = src;
        }
        if let Some(pip) = file.pip {
            self.pip = pip;
        }
        if let Some(protocol) = file.protocol {
            self.protocol = protocol;
        }
        if let Some(user) = file.user {
            self.user = user;
        }
    }
}

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_owned()))
}

/// Return the config file path: `$PIPHUB_CONFIG`, or `~/.piphub`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => home_dir().join(".piphub"),
    }
}

/// Load `path` over `defaults`. A missing file yields `defaults` unchanged.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the file exists but cannot be
/// deserialized, or [`ConfigError::Io`] if it cannot be read.
pub fn load_config(path: &Path, defaults: Config) -> Result<Config, ConfigError> {
    let mut cfg = defaults;
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(cfg);
    }
    let raw = std::fs::read_to_string(path)?;
    let file: ConfigFile = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.merge(file);
    Ok(cfg)
}

/// Write `cfg` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut json = serde_json::to_string_pretty(cfg)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
