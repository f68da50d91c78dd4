//! Configuration loading and path expansion.
//!
//! # Responsibility
//! - Load the TOML config file and apply built-in defaults.
//! - Resolve the research root, store path, and index path.
//!
//! # Invariants
//! - An explicitly passed config path must exist; the default location may
//!   be absent.
//! - `~` expansion only touches a leading tilde.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_RESEARCH_ROOT: &str = "~/research";
const DB_FILE_NAME: &str = "research.db";
const INDEX_FILE_NAME: &str = "_INDEX.md";

/// Tool configuration, loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_research_root")]
    pub research_root: String,
    #[serde(default)]
    pub db_path: Option<String>,
    #[serde(default)]
    pub log_dir: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_research_root() -> String {
    DEFAULT_RESEARCH_ROOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            research_root: default_research_root(),
            db_path: None,
            log_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from `explicit` when given, otherwise from the
    /// default location, otherwise built-in defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(raw) => Self::from_file(&expand_path(raw)),
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Expanded research root directory.
    pub fn research_root(&self) -> PathBuf {
        expand_path(&self.research_root)
    }

    /// Expanded research store path; defaults to `research.db` under the
    /// research root.
    pub fn db_path(&self) -> PathBuf {
        match &self.db_path {
            Some(raw) => expand_path(raw),
            None => self.research_root().join(DB_FILE_NAME),
        }
    }

    /// Default index file location under the research root.
    pub fn default_index_path(&self) -> PathBuf {
        self.research_root().join(INDEX_FILE_NAME)
    }

    /// Expanded log directory; `None` keeps file logging off.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(expand_path)
    }
}

/// Default config location: `~/.config/refdex/config.toml`.
pub fn default_config_path() -> PathBuf {
    expand_path("~/.config/refdex/config.toml")
}

/// Expands a leading `~` to `$HOME`. Other paths pass through unchanged, as
/// does `~` itself when `HOME` is unset.
pub fn expand_path(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home);
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(raw)
}
