// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    ///
    /// Env: EXPLORER_SERVER_HOST
    /// Default: 127.0.0.1
    pub host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: EXPLORER_SERVER_PORT
    /// Default: 8000
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::ValidateError(format!(
                "Server host '{}' is not a valid IP address",
                self.host
            )));
        }

        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Server port cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_validate_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_host() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        assert!(config.validate().is_ok());

        let config = ServerConfig {
            host: "not an address".to_string(),
            port: 3000,
        };
        assert!(config.validate().is_err());
    }
}
