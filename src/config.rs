use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Public GitHub REST endpoint, used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".pr-labeler.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .pr-labeler.toml.
/// All fields are optional; inside Actions the environment supplies everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    /// GitHub API token. If None, falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    /// REST API base URL. If None, falls back to GITHUB_API_URL, then api.github.com.
    pub api_url: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or from .pr-labeler.toml in the
    /// current directory when no path is given, then fill gaps from the
    /// process environment.
    /// A missing default file yields the default config; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading environment variables through `env`.
    pub fn load_with_env<E>(path: Option<&Path>, env: E) -> Result<Config, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        Ok(config.with_env(env))
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Fill an absent or empty token from GITHUB_TOKEN and an absent or
    /// empty API URL from GITHUB_API_URL. Configured values win.
    pub fn with_env<E>(mut self, env: E) -> Config
    where
        E: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        self.github.token = non_empty(self.github.token).or_else(|| lookup("GITHUB_TOKEN"));
        self.github.api_url = non_empty(self.github.api_url).or_else(|| lookup("GITHUB_API_URL"));
        self
    }

    /// The GitHub token, if one was configured or found in the environment.
    pub fn github_token(&self) -> Option<String> {
        non_empty(self.github.token.clone())
    }

    /// The API base URL, defaulting to api.github.com.
    pub fn api_url(&self) -> String {
        non_empty(self.github.api_url.clone()).unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
