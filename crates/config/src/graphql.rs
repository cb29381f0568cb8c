// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::time::Duration;

/// Path of the GraphQL API on a DefraDB node.
pub const DEFRA_GRAPHQL_PATH: &str = "/api/v0/graphql";

/// Largest page the home query may request.
const MAX_BLOCK_LIMIT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct GraphqlConfig {
    /// DefraDB GraphQL endpoint
    ///
    /// Env: EXPLORER_GRAPHQL_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:9181/api/v0/graphql
    pub url: String,

    /// Value sent in the `Origin` header of every GraphQL request
    ///
    /// Env: EXPLORER_GRAPHQL_ORIGIN
    /// Default: http://127.0.0.1:8000
    pub origin: String,

    /// Upper bound on a single GraphQL request, in seconds
    ///
    /// Env: EXPLORER_GRAPHQL_TIMEOUT_SECS
    /// Default: 30
    pub timeout_secs: u64,

    /// Number of most recent blocks shown on the home page
    ///
    /// Env: EXPLORER_GRAPHQL_BLOCK_LIMIT
    /// Default: 10
    pub block_limit: u32,
}

fn default_url() -> String {
    format!("http://127.0.0.1:9181{}", DEFRA_GRAPHQL_PATH)
}

fn default_origin() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_block_limit() -> u32 {
    10
}

impl GraphqlConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_http_url("GraphQL URL", &self.url)?;
        Self::validate_http_url("GraphQL origin", &self.origin)?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "GraphQL timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.block_limit == 0 || self.block_limit > MAX_BLOCK_LIMIT {
            return Err(ConfigError::ValidateError(format!(
                "GraphQL block limit must be between 1 and {}, got {}",
                MAX_BLOCK_LIMIT, self.block_limit
            )));
        }

        Ok(())
    }

    fn validate_http_url(name: &str, url_str: &str) -> Result<(), ConfigError> {
        if url_str.is_empty() {
            return Err(ConfigError::ValidateError(format!(
                "{} cannot be empty",
                name
            )));
        }

        let parsed = url::Url::parse(url_str).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid {} '{}': {}", name, url_str, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::ValidateError(format!(
                "Invalid {} scheme '{}'. Must be http:// or https://",
                name, scheme
            ))),
        }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            origin: default_origin(),
            timeout_secs: default_timeout_secs(),
            block_limit: default_block_limit(),
        }
    }
}
