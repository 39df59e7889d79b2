//! Relay configuration loaded from TOML.

use crate::utils::expand_env_vars;
use anyhow::{Context, Result, bail};
use llm::endpoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config directory name under platform config dir.
pub const CONFIG_DIR: &str = "fitb";
/// Relay configuration filename.
pub const CONFIG_FILE: &str = "relay.toml";
/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
/// Default upstream model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Resolve the default configuration file (`~/.config/fitb/relay.toml` on
/// linux). `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Top-level relay configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Server bind configuration.
    pub server: ServerConfig,
    /// Upstream completions API configuration.
    pub upstream: UpstreamConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the relay listens on. Port `0` picks a free port.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
        }
    }
}

/// Upstream completions API configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API key (supports `${ENV_VAR}` expansion).
    pub api_key: String,
    /// OpenAI-compatible API base URL.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: format!("${{{API_KEY_ENV}}}"),
            base_url: endpoint::OPENROUTER_BASE.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl UpstreamConfig {
    /// The chat completions URL below the configured base.
    pub fn endpoint(&self) -> String {
        endpoint::completions(&self.base_url)
    }
}

impl RelayConfig {
    /// Parse a TOML string into a `RelayConfig`, expanding environment
    /// variables in every string field (including defaults).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.server.bind = expand_env_vars(&config.server.bind);
        config.upstream.api_key = expand_env_vars(&config.upstream.api_key);
        config.upstream.base_url = expand_env_vars(&config.upstream.base_url);
        config.upstream.model = expand_env_vars(&config.upstream.model);
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Load an explicit config file, else the default file when it exists,
    /// else the built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("using config file {}", path.display());
                Self::load(&path)
            }
            _ => Self::from_toml(""),
        }
    }

    /// Check that the relay can start with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.api_key.trim().is_empty() {
            bail!("missing upstream API key: set {API_KEY_ENV} or upstream.api_key");
        }
        if self.upstream.model.trim().is_empty() {
            bail!("upstream.model must not be empty");
        }
        Ok(())
    }
}
