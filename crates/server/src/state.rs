// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::graphql::{GraphqlClient, blocks_query};
use config::ExplorerConfig;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to build GraphQL HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared by every request. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ExplorerConfig>,
    pub graphql: GraphqlClient,
    /// Home page query, built once from the configured block limit.
    pub home_query: Arc<str>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Result<Self, StateError> {
        let graphql = GraphqlClient::from_config(&config.graphql)?;
        Ok(Self::with_client(config, graphql))
    }

    pub fn with_client(config: ExplorerConfig, graphql: GraphqlClient) -> Self {
        let home_query = blocks_query(config.graphql.block_limit).into();
        Self {
            config: Arc::new(config),
            graphql,
            home_query,
        }
    }
}
