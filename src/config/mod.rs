mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Loads configuration from `.env`, the optional YAML file named by
/// `CONFIG_PATH`, and finally the process environment.
pub async fn load() -> Result<Config> {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;
    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

/// Reads a YAML config file, falling back to defaults when it does not exist.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides file values with environment variables resolved by `lookup`.
    /// Empty or blank values count as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        if let Some(base_url) = lookup("HUGGING_FACE_BASE_URL") {
            self.provider.base_url = base_url;
        }

        if let Some(api_key) = lookup("HUGGING_FACE_API_KEY") {
            self.provider.api_key = api_key;
        }

        if let Some(model) = lookup("HUGGING_FACE_MODEL") {
            self.provider.model = model;
        }

        if let Some(timeout) = lookup("HUGGING_FACE_TIMEOUT_SECS") {
            self.provider.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::config(format!(
                    "Invalid HUGGING_FACE_TIMEOUT_SECS value: '{}'",
                    timeout
                ))
            })?;
        }

        Ok(())
    }
}
