//! Collector configuration.
//!
//! Defaults can be overridden from a TOML file:
//!
//! ```toml
//! parallel = true
//! chunk_size = 1000
//! workers = 4
//!
//! [http]
//! timeout_secs = 120
//! user_agent = "packagegraph-collector/0.3.0"
//! ```
//!
//! Every key is optional.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::CollectError;
use crate::parallel::ChunkRunner;

/// Collector settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectorConfig {
    /// Process large inputs on worker threads.
    pub parallel: bool,
    /// Items per chunk; inputs smaller than this are processed inline.
    pub chunk_size: usize,
    /// Number of worker threads.
    pub workers: usize,
    /// HTTP client settings.
    pub http: HttpSettings,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            chunk_size: 1000,
            workers: 4,
            http: HttpSettings::default(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 120,
            user_agent: format!("packagegraph-collector/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpSettings {
    /// The request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CollectorConfig {
    /// Loads a config file, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Config`] if the file cannot be read or is not
    /// valid TOML for this structure.
    pub fn load(path: &Path) -> Result<Self, CollectError> {
        let text = std::fs::read_to_string(path).map_err(|e| CollectError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text).map_err(|message| CollectError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(text: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(text).map_err(|e| e.to_string())?;
        if config.chunk_size == 0 {
            return Err("chunk_size must be at least 1".to_owned());
        }
        if config.workers == 0 {
            return Err("workers must be at least 1".to_owned());
        }
        Ok(config)
    }

    /// A chunk runner using these settings.
    #[must_use]
    pub fn runner(&self) -> ChunkRunner {
        ChunkRunner::new(self.parallel, self.chunk_size, self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CollectorConfig::default();
        assert!(config.parallel);
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.workers, 4);
        assert!(config.http.user_agent.starts_with("packagegraph-collector/"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = CollectorConfig::from_toml("workers = 8\n[http]\ntimeout_secs = 5\n")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.workers, 8);
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.http.timeout(), Duration::from_secs(5));
        assert_eq!(config.http.user_agent, HttpSettings::default().user_agent);
    }

    #[test]
    fn rejects_unknown_keys_and_zero_sizes() {
        assert!(CollectorConfig::from_toml("threads = 2").is_err());
        assert!(CollectorConfig::from_toml("chunk_size = 0").is_err());
        assert!(CollectorConfig::from_toml("workers = 0").is_err());
    }

    #[test]
    fn load_reports_path() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("collector.toml");
        std::fs::write(&path, "parallel = \"yes\"").unwrap_or_else(|e| panic!("{e}"));
        match CollectorConfig::load(&path) {
            Err(CollectError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
