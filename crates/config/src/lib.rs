// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod graphql;
mod log;
mod server;

pub use args::Args;
pub use error::ConfigError;
pub use graphql::{DEFRA_GRAPHQL_PATH, GraphqlConfig};
pub use log::LogConfig;
pub use server::ServerConfig;

use serde::Deserialize;
use std::path::Path;

/// Prefix shared by every environment variable the explorer reads.
pub const ENV_PREFIX: &str = "EXPLORER_";

#[derive(Debug, Clone, Default)]
pub struct ExplorerConfig {
    pub server: ServerConfig,
    pub graphql: GraphqlConfig,
    pub log: LogConfig,
}

/// Flat view of the `EXPLORER_*` variables. Unset variables stay `None`
/// and fall back to the section defaults.
#[derive(Debug, Default, Deserialize)]
struct EnvValues {
    server_host: Option<String>,
    server_port: Option<u16>,
    graphql_url: Option<String>,
    graphql_origin: Option<String>,
    graphql_timeout_secs: Option<u64>,
    graphql_block_limit: Option<u32>,
    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,
    log_loki_url: Option<String>,
}

impl ExplorerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let values = envy::prefixed(ENV_PREFIX).from_env::<EnvValues>()?;
        Self::from_values(values)
    }

    /// Load configuration from an explicit set of `(key, value)` pairs,
    /// using the same `EXPLORER_` keys as the environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let values = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvValues>(vars)?;
        Self::from_values(values)
    }

    /// Load a `.env` file into the process environment.
    ///
    /// Returns `Ok(false)` when the file does not exist, so a missing
    /// default `.env` is not an error.
    pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(true)
    }

    fn from_values(values: EnvValues) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = values.server_host {
            config.server.host = host;
        }
        if let Some(port) = values.server_port {
            config.server.port = port;
        }

        if let Some(url) = values.graphql_url {
            config.graphql.url = url;
        }
        if let Some(origin) = values.graphql_origin {
            config.graphql.origin = origin;
        }
        if let Some(timeout) = values.graphql_timeout_secs {
            config.graphql.timeout_secs = timeout;
        }
        if let Some(limit) = values.graphql_block_limit {
            config.graphql.block_limit = limit;
        }

        if let Some(level) = values.log_level {
            config.log.level = level;
        }
        if let Some(json) = values.log_json {
            config.log.json = json;
        }
        if let Some(strip_ansi) = values.log_strip_ansi {
            config.log.strip_ansi = strip_ansi;
        }
        if let Some(write) = values.log_write {
            config.log.write = write;
        }
        if let Some(path) = values.log_write_path {
            config.log.write_path = path;
        }
        if let Some(size) = values.log_write_max_file_size {
            config.log.write_max_file_size = size;
        }
        if let Some(files) = values.log_write_max_files {
            config.log.write_max_files = files;
        }
        // An empty value disables Loki, so `EXPLORER_LOG_LOKI_URL=` can override a .env file.
        config.log.loki_url = values.log_loki_url.filter(|url| !url.is_empty());

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.graphql.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.graphql.url, "http://127.0.0.1:9181/api/v0/graphql");
        assert_eq!(config.graphql.timeout_secs, 30);
        assert_eq!(config.graphql.block_limit, 10);
    }

    #[test]
    fn test_empty_vars_use_defaults() {
        let config = ExplorerConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.graphql.origin, "http://127.0.0.1:8000");
        assert!(config.log.loki_url.is_none());
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = ExplorerConfig::from_vars(vars(&[
            ("EXPLORER_SERVER_PORT", "9000"),
            ("EXPLORER_GRAPHQL_URL", "https://defra.example.com/api/v0/graphql"),
            ("EXPLORER_GRAPHQL_TIMEOUT_SECS", "5"),
            ("EXPLORER_GRAPHQL_BLOCK_LIMIT", "25"),
            ("EXPLORER_LOG_LEVEL", "debug"),
            ("EXPLORER_LOG_JSON", "true"),
            ("UNRELATED_VARIABLE", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.graphql.url, "https://defra.example.com/api/v0/graphql");
        assert_eq!(config.graphql.timeout_secs, 5);
        assert_eq!(config.graphql.block_limit, 25);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
    }

    #[test]
    fn test_empty_loki_url_is_disabled() {
        let config = ExplorerConfig::from_vars(vars(&[("EXPLORER_LOG_LOKI_URL", "")])).unwrap();
        assert!(config.log.loki_url.is_none());
    }

    #[test]
    fn test_unparseable_port_is_rejected() {
        let result = ExplorerConfig::from_vars(vars(&[("EXPLORER_SERVER_PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        for (key, value) in [
            ("EXPLORER_SERVER_PORT", "0"),
            ("EXPLORER_GRAPHQL_URL", "ftp://127.0.0.1/graphql"),
            ("EXPLORER_GRAPHQL_TIMEOUT_SECS", "0"),
            ("EXPLORER_LOG_LEVEL", "verbose"),
        ] {
            let result = ExplorerConfig::from_vars(vars(&[(key, value)]));
            assert!(
                matches!(result, Err(ConfigError::ValidateError(_))),
                "{}={} should fail validation",
                key,
                value
            );
        }
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ExplorerConfig::load_env_file(dir.path().join(".env.missing")).unwrap();
        assert!(!loaded);
    }

    #[test]
    #[serial]
    fn test_env_file_feeds_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "EXPLORER_GRAPHQL_BLOCK_LIMIT=42").unwrap();
        writeln!(file, "EXPLORER_SERVER_PORT=8123").unwrap();

        let loaded = ExplorerConfig::load_env_file(file.path()).unwrap();
        assert!(loaded);

        let config = ExplorerConfig::from_env().unwrap();
        assert_eq!(config.graphql.block_limit, 42);
        assert_eq!(config.server.port, 8123);

        // SAFETY: serialized with the other environment tests.
        unsafe {
            std::env::remove_var("EXPLORER_GRAPHQL_BLOCK_LIMIT");
            std::env::remove_var("EXPLORER_SERVER_PORT");
        }
    }
}
