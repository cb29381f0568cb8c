// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::GraphqlConfig;
use reqwest::{
    StatusCode,
    header::{ACCEPT, CONTENT_TYPE, ORIGIN},
};
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

/// Why a GraphQL request produced no usable body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("non-200 status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Result of a single GraphQL request.
///
/// `Success` carries the parsed response body, which may hold `data`,
/// `errors` or neither. Interpreting it is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Value),
    Failure(FetchError),
}

/// Issues GraphQL queries against one DefraDB endpoint.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    origin: String,
}

impl GraphqlClient {
    pub fn new(
        endpoint: impl Into<String>,
        origin: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            origin: origin.into(),
        })
    }

    pub fn from_config(config: &GraphqlConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.url, &config.origin, config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `query` once. Every failure is reported through the returned outcome.
    pub async fn fetch(&self, query: &str) -> FetchOutcome {
        match self.execute(query).await {
            Ok(body) => FetchOutcome::Success(body),
            Err(err) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    error = %err,
                    "Error fetching data from GraphQL endpoint"
                );
                FetchOutcome::Failure(err)
            }
        }
    }

    async fn execute(&self, query: &str) -> Result<Value, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(ORIGIN, &self.origin)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "GraphQL response status: {}", status);

        if status != StatusCode::OK {
            // The body is only useful for diagnosing the endpoint.
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "GraphQL error response");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::from_reqwest)?;
        let parsed: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;
        tracing::debug!(body = %parsed, "GraphQL response data");

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{MockGraphqlServer, MockReply, closed_endpoint};

    const QUERY: &str = "query { Block(limit: 1) { hash } }";

    fn client_for(url: &str, timeout: Duration) -> GraphqlClient {
        GraphqlClient::new(url, "http://127.0.0.1:8000", timeout).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_returns_parsed_body() {
        let body = json!({ "data": { "Block": [{ "hash": "0xabc" }] } });
        let server = MockGraphqlServer::spawn(MockReply::json(body.clone())).await;

        let outcome = client_for(&server.url, Duration::from_secs(5))
            .fetch(QUERY)
            .await;

        assert_eq!(outcome, FetchOutcome::Success(body));
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_headers() {
        let server = MockGraphqlServer::spawn(MockReply::json(json!({ "data": {} }))).await;

        client_for(&server.url, Duration::from_secs(5))
            .fetch(QUERY)
            .await;

        let requests = server.requests();
        assert_eq!(requests.len(), 1, "exactly one attempt per fetch");
        let request = &requests[0];
        assert_eq!(request.body, json!({ "query": QUERY }));
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
        assert_eq!(request.accept.as_deref(), Some("application/json"));
        assert_eq!(request.origin.as_deref(), Some("http://127.0.0.1:8000"));
    }

    #[tokio::test]
    async fn test_fetch_graphql_errors_are_still_success() {
        let body = json!({ "errors": [{ "message": "Cannot query field" }] });
        let server = MockGraphqlServer::spawn(MockReply::json(body.clone())).await;

        let outcome = client_for(&server.url, Duration::from_secs(5))
            .fetch(QUERY)
            .await;

        assert_eq!(outcome, FetchOutcome::Success(body));
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_failure() {
        let server = MockGraphqlServer::spawn(MockReply::status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal error",
        ))
        .await;

        let outcome = client_for(&server.url, Duration::from_secs(5))
            .fetch(QUERY)
            .await;

        assert_eq!(outcome, FetchOutcome::Failure(FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_is_malformed() {
        let server =
            MockGraphqlServer::spawn(MockReply::status(StatusCode::OK, "<html>oops</html>")).await;

        let outcome = client_for(&server.url, Duration::from_secs(5))
            .fetch(QUERY)
            .await;

        assert!(
            matches!(outcome, FetchOutcome::Failure(FetchError::MalformedBody(_))),
            "unexpected outcome: {:?}",
            outcome
        );
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockGraphqlServer::spawn(MockReply::delayed(
            Duration::from_secs(2),
            json!({ "data": { "Block": [] } }),
        ))
        .await;

        let outcome = client_for(&server.url, Duration::from_millis(100))
            .fetch(QUERY)
            .await;

        assert_eq!(outcome, FetchOutcome::Failure(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_failure() {
        let url = closed_endpoint().await;

        let outcome = client_for(&url, Duration::from_secs(5)).fetch(QUERY).await;

        assert!(
            matches!(outcome, FetchOutcome::Failure(FetchError::Transport(_))),
            "unexpected outcome: {:?}",
            outcome
        );
    }

    #[test]
    fn test_from_config() {
        let config = GraphqlConfig::default();
        let client = GraphqlClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9181/api/v0/graphql");
    }
}
