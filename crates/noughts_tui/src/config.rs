//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration. Every field has a default, so an empty or
/// missing file is valid.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Start with the computer playing O.
    #[serde(default)]
    vs_computer: bool,

    /// Where tracing output goes (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Computer opponent pacing.
    #[serde(default)]
    computer: ComputerConfig,

    /// Win celebration.
    #[serde(default)]
    confetti: ConfettiConfig,
}

/// Delays before the computer's move appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ComputerConfig {
    /// Pause before the computer starts its move.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Further pause before the mark is placed.
    #[serde(default = "default_place_delay_ms")]
    place_delay_ms: u64,
}

/// Confetti particle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConfettiConfig {
    /// Particles per burst.
    #[serde(default = "default_particle_count")]
    particle_count: usize,

    /// Maximum time the effect stays on screen.
    #[serde(default = "default_duration_ms")]
    duration_ms: u64,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_think_delay_ms() -> u64 {
    500
}

fn default_place_delay_ms() -> u64 {
    300
}

fn default_particle_count() -> usize {
    150
}

fn default_duration_ms() -> u64 {
    3000
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            place_delay_ms: default_place_delay_ms(),
        }
    }
}

impl ComputerConfig {
    /// Total wait between a human move and the computer's answer.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms + self.place_delay_ms)
    }
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl ConfettiConfig {
    /// How long a burst may last.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vs_computer: false,
            log_file: default_log_file(),
            computer: ComputerConfig::default(),
            confetti: ConfettiConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(vs_computer = config.vs_computer, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, vs_computer: bool, log_file: Option<PathBuf>) -> Self {
        self.vs_computer |= vs_computer;
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.computer().delay(), Duration::from_millis(800));
        assert_eq!(*config.confetti().particle_count(), 150);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vs_computer = true\n\n[computer]\nthink_delay_ms = 100").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(*config.vs_computer());
        assert_eq!(*config.computer().think_delay_ms(), 100);
        assert_eq!(*config.computer().place_delay_ms(), 300);
        assert_eq!(config.confetti().duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vs_computer = \"maybe\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(true, Some(PathBuf::from("x.log")));
        assert!(*config.vs_computer());
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));
    }
}
