//! Configuration – reads `~/.kuantum/config.toml`.
//!
//! The file is optional and never written; a missing file means defaults.
//! Values are layered file → `KUANTUM_*` environment → command-line flags.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User configuration stored in `~/.kuantum/config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Seed for the object-kind generator.  Unset means a fresh random
    /// sequence every run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Emit ANSI colour codes.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Consecutive unexpected console faults tolerated before the session
    /// gives up.
    #[serde(default = "default_max_consecutive_faults")]
    pub max_consecutive_faults: usize,
}

fn default_color() -> bool {
    true
}
fn default_max_consecutive_faults() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            color: default_color(),
            max_consecutive_faults: default_max_consecutive_faults(),
        }
    }
}

/// Return the path to `~/.kuantum/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".kuantum").join("config.toml")
}

/// Parse the config file at `path`.  Returns `None` if the file does not
/// exist.  Environment overrides are applied separately by the caller through
/// [`apply_env_overrides`], so they hold even without a file.
pub fn load_from(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(cfg))
}

/// Apply `KUANTUM_*` environment variable overrides to `cfg`.
///
/// | Variable | Config field |
/// |---|---|
/// | `KUANTUM_SEED` | `seed` |
/// | `KUANTUM_COLOR` | `color` (`0`/`false`/`no` disable) |
/// | `KUANTUM_MAX_FAULTS` | `max_consecutive_faults` |
///
/// Unparseable values are ignored.
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("KUANTUM_SEED")
        && let Ok(seed) = v.trim().parse::<u64>() {
            cfg.seed = Some(seed);
        }
    if let Ok(v) = std::env::var("KUANTUM_COLOR")
        && let Some(color) = parse_flag(&v) {
            cfg.color = color;
        }
    if let Ok(v) = std::env::var("KUANTUM_MAX_FAULTS")
        && let Ok(n) = v.trim().parse::<usize>()
        && n > 0 {
            cfg.max_consecutive_faults = n;
        }
}

/// Serialises tests that read or write `KUANTUM_*` variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
