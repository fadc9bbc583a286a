// ABOUTME: Configuration loading for archlog.
// ABOUTME: Reads ~/.architect-logger/config.toml, then applies environment overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::format::{Limits, MESSAGE_MAX_CHARS, OUTPUT_MAX_CHARS};
use crate::session::DEFAULT_POINTER_FILE;

/// Environment variable overriding `session.pointer_file`.
pub const POINTER_FILE_ENV: &str = "ARCHLOG_POINTER_FILE";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub format: FormatConfig,
}

/// Where the session pointer lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pointer file path, relative to the workspace unless absolute.
    pub pointer_file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pointer_file: PathBuf::from(DEFAULT_POINTER_FILE),
        }
    }
}

/// Truncation caps for rendered records.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub message_max_chars: usize,
    pub output_max_chars: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            message_max_chars: MESSAGE_MAX_CHARS,
            output_max_chars: OUTPUT_MAX_CHARS,
        }
    }
}

impl FormatConfig {
    pub fn limits(&self) -> Limits {
        Limits {
            message_max_chars: self.message_max_chars,
            output_max_chars: self.output_max_chars,
        }
    }
}

impl Config {
    /// Load config from ~/.architect-logger/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".architect-logger")
            .join("config.toml")
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to read variables.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(pointer) = lookup(POINTER_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.session.pointer_file = PathBuf::from(pointer.trim());
        }
    }
}
