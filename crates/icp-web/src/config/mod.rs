//! Configuration loading for the ICP checker.
//! Reads icp.toml from the current directory or the path in the ICP_CONFIG env var.

use std::path::{Path, PathBuf};

use anyhow::Context;
use icp_classifier::ClassifierConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the configuration was read from; `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info,icp_web=info,icp_classifier=info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

#[cfg(test)]
mod tests;

impl Config {
    /// Load from `$ICP_CONFIG` (default `icp.toml`), then apply the
    /// `ICP_HOST` / `ICP_PORT` environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("ICP_CONFIG")
            .unwrap_or_else(|_| "icp.toml".to_string());

        let mut config = Self::load_from(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a TOML file. A missing file yields the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ICP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ICP_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("ICP_PORT must be a port number, got {port:?}"))?;
        }
        Ok(())
    }
}
