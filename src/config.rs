use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const CONFIG_DIR_NAME: &str = "radarr-sonarr-mcp";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_RADARR_URL: &str = "http://localhost:7878";
pub const DEFAULT_SONARR_URL: &str = "http://localhost:8989";
pub const DEFAULT_BASE_PATH: &str = "/api/v3";

/// Connection settings for a single Radarr or Sonarr instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default, alias = "apiKey")]
    pub api_key: String,
    /// Full URL of the instance, e.g. `http://10.0.0.23:7878`. Left empty
    /// in the file, the service's default port on localhost is used.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_base_path", alias = "basePath")]
    pub base_path: String,
}

impl ServiceConfig {
    pub fn new(url: &str) -> Self {
        Self {
            api_key: String::new(),
            url: url.to_string(),
            base_path: default_base_path(),
        }
    }

    /// URL of the API root: the instance URL followed by the base path.
    pub fn api_root(&self) -> String {
        let url = self.url.trim_end_matches('/');
        let base_path = self.base_path.trim_matches('/');
        if base_path.is_empty() {
            url.to_string()
        } else {
            format!("{}/{}", url, base_path)
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn validate(&self, name: &str) -> Result<()> {
        let url = Url::parse(&self.url)
            .with_context(|| format!("Invalid URL in '{}': \"{}\"", name, self.url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Invalid URL in '{}': \"{}\" (only http and https are supported)",
                name,
                self.url
            );
        }
        if !self.base_path.starts_with('/') {
            bail!(
                "Invalid base path in '{}': \"{}\" (must start with '/')",
                name,
                self.base_path
            );
        }
        Ok(())
    }
}

/// How tool results are rendered for the assistant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Concise, line-oriented text
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
    #[serde(default = "default_request_timeout_secs", alias = "requestTimeoutSecs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            response_format: ResponseFormat::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_radarr_config", alias = "radarrConfig")]
    pub radarr_config: ServiceConfig,
    #[serde(default = "default_sonarr_config", alias = "sonarrConfig")]
    pub sonarr_config: ServiceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_radarr_config() -> ServiceConfig {
    ServiceConfig::new(DEFAULT_RADARR_URL)
}

fn default_sonarr_config() -> ServiceConfig {
    ServiceConfig::new(DEFAULT_SONARR_URL)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radarr_config: default_radarr_config(),
            sonarr_config: default_sonarr_config(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Missing API keys are allowed here; they are reported when the
    /// corresponding service is first called.
    pub fn validate(&self) -> Result<()> {
        self.radarr_config.validate("radarr_config")?;
        self.sonarr_config.validate("sonarr_config")?;
        if self.server.request_timeout_secs == 0 {
            bail!("Invalid 'request_timeout_secs': must be greater than 0");
        }
        Ok(())
    }

    /// Fill in service URLs the config file left out.
    fn apply_default_urls(&mut self) {
        for (service, default_url) in [
            (&mut self.radarr_config, DEFAULT_RADARR_URL),
            (&mut self.sonarr_config, DEFAULT_SONARR_URL),
        ] {
            if service.url.trim().is_empty() {
                service.url = default_url.to_string();
            }
        }
    }

    /// Override individual fields from environment-style variables.
    ///
    /// Empty values are ignored so an exported-but-blank variable does not
    /// wipe a key stored in the config file.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        for (prefix, service) in [
            ("RADARR", &mut self.radarr_config),
            ("SONARR", &mut self.sonarr_config),
        ] {
            if let Some(api_key) = get(&format!("{}_API_KEY", prefix)) {
                service.api_key = api_key;
            }
            if let Some(url) = get(&format!("{}_URL", prefix)) {
                service.url = url;
            }
            if let Some(base_path) = get(&format!("{}_BASE_PATH", prefix)) {
                service.base_path = base_path;
            }
        }
    }
}

/// Default config location: `~/.config/radarr-sonarr-mcp/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file that was read, if one existed.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// True if config was loaded from a file, false if using defaults.
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

/// Load configuration from `path` (or the default location), then apply
/// environment overrides from the process environment.
pub fn load_config(path: Option<&Path>) -> Result<ConfigLoadResult> {
    load_config_with_env(path, |name| std::env::var(name).ok())
}

pub fn load_config_with_env<F>(path: Option<&Path>, lookup: F) -> Result<ConfigLoadResult>
where
    F: Fn(&str) -> Option<String>,
{
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let (mut config, loaded_from) = match path {
        Some(path) if path.exists() => (read_config_file(&path)?, Some(path)),
        _ => (Config::default(), None),
    };

    config.apply_env_overrides(lookup);
    config.validate()?;

    Ok(ConfigLoadResult {
        config,
        path: loaded_from,
    })
}

/// Read the config file at `path` as stored, or the defaults if it does not
/// exist. Neither environment overrides nor validation are applied, so a
/// file with bad values can still be loaded and corrected.
pub fn read_stored_config(path: &Path) -> Result<Config> {
    if path.exists() {
        read_config_file(path)
    } else {
        Ok(Config::default())
    }
}

fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.apply_default_urls();
    Ok(config)
}

/// Write `config` as pretty JSON, creating parent directories as needed.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config.")?;
    fs::write(path, format!("{}\n", json))
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}
