//! Application configuration.
//!
//! One config struct serves both front ends; the `serve` subcommand uses the
//! host/port/output sections, the desktop only the engine section. Values
//! come from an optional YAML file with CLI flags layered on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind host for the web surface
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the web surface
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory where generated WAV files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Kokoro sidecar settings
    #[serde(default)]
    pub engine: EngineSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Kokoro sidecar settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Sidecar base URL
    #[serde(default = "default_engine_url")]
    pub base_url: String,

    /// Request timeout in seconds; synthesis of long texts is slow
    #[serde(default = "default_engine_timeout")]
    pub timeout_secs: u64,
}

impl EngineSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: default_engine_url(),
            timeout_secs: default_engine_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    53286
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("kokoro_outputs")
}

fn default_engine_url() -> String {
    "http://127.0.0.1:8880".to_string()
}

fn default_engine_timeout() -> u64 {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            output_dir: default_output_dir(),
            engine: EngineSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 53286);
        assert_eq!(config.engine.base_url, "http://127.0.0.1:8880");
        assert_eq!(config.engine.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("port: 9000\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.engine.timeout_secs, 120);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.engine.base_url = "http://tts.internal:8880".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.engine.base_url, "http://tts.internal:8880");
    }
}
