use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harness: HarnessConfig,
}

/// Harness-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    /// Path to the QALD benchmark JSON file.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// QA service endpoint questions are POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Language tag used both to pick the question text and as the `lang`
    /// request parameter.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            endpoint: default_endpoint(),
            language: default_language(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("qald-7-train-multilingual.json")
}

fn default_endpoint() -> String {
    "http://localhost:8181/ask-gerbil".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) first.
    /// Looks for a config file in this order:
    /// 1. Path specified in QALD_REPLAY_CONFIG environment variable
    ///    (must exist if set)
    /// 2. ./config.toml in current directory (optional)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let config = match std::env::var("QALD_REPLAY_CONFIG") {
            Ok(path) => {
                let path = PathBuf::from(path);
                let config_str = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&config_str)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            Err(_) => {
                let default_path = Path::new("config.toml");
                if default_path.exists() {
                    let config_str = std::fs::read_to_string(default_path)
                        .context("Failed to read config.toml")?;
                    toml::from_str(&config_str).context("Failed to parse config.toml")?
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.harness.language.trim().is_empty() {
            anyhow::bail!("harness.language must not be empty");
        }

        url::Url::parse(&self.harness.endpoint).with_context(|| {
            format!(
                "harness.endpoint is not a valid URL: {}",
                self.harness.endpoint
            )
        })?;

        Ok(())
    }

    /// Get dataset path
    pub fn dataset_path(&self) -> &Path {
        &self.harness.dataset_path
    }
}
