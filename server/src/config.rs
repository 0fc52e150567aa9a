//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the bundled by-product dataset when set.
    pub byproducts_path: Option<PathBuf>,
    /// Overrides the bundled company dataset when set.
    pub companies_path: Option<PathBuf>,
    pub max_results: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, byproducts_path: None, companies_path: None, max_results: DEFAULT_MAX_RESULTS }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `BYPRODUCTS_PATH`: JSON crop by-product dataset
    /// - `COMPANIES_PATH`: JSON company dataset
    /// - `MAX_RESULTS`: default 10; unparseable values fall back to the default
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let path = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        Ok(Self {
            port,
            byproducts_path: path("BYPRODUCTS_PATH"),
            companies_path: path("COMPANIES_PATH"),
            max_results: env_parse(lookup("MAX_RESULTS"), DEFAULT_MAX_RESULTS),
        })
    }
}

fn env_parse(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
