// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-process mock of a DefraDB GraphQL endpoint.
//!
//! The mock binds to an ephemeral port on 127.0.0.1, records every request it
//! receives and answers with a canned reply.

use crate::graphql::GraphqlClient;
use crate::state::AppState;
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use config::{DEFRA_GRAPHQL_PATH, ExplorerConfig};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the mock endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub body: Value,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub origin: Option<String>,
}

/// Canned reply served for every request.
#[derive(Debug, Clone)]
pub struct MockReply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl MockReply {
    /// `200 OK` with a JSON body.
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    /// Arbitrary status with a raw text body.
    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    /// `200 OK` with a JSON body, sent only after `delay`.
    pub fn delayed(delay: Duration, body: Value) -> Self {
        Self {
            delay: Some(delay),
            ..Self::json(body)
        }
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockGraphqlServer {
    /// Full GraphQL endpoint URL of the mock.
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockGraphqlServer {
    pub async fn spawn(reply: MockReply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route(DEFRA_GRAPHQL_PATH, post(handle_graphql))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock GraphQL server");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock GraphQL server address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock GraphQL server failed");
        });

        Self {
            url: format!("http://{}{}", addr, DEFRA_GRAPHQL_PATH),
            requests,
            handle,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl Drop for MockGraphqlServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_graphql(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let recorded = RecordedRequest {
        body: serde_json::from_str(&body).unwrap_or(Value::String(body)),
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
        origin: header_value(header::ORIGIN),
    };
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(recorded);

    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
        .into_response()
}

/// URL of an endpoint nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read probe listener address");
    drop(listener);

    format!("http://{}{}", addr, DEFRA_GRAPHQL_PATH)
}

/// Application state pointing at `graphql_url` with a short timeout.
pub fn test_state(graphql_url: &str, timeout: Duration) -> AppState {
    let mut config = ExplorerConfig::default();
    config.graphql.url = graphql_url.to_string();

    let graphql = GraphqlClient::new(graphql_url, &config.graphql.origin, timeout)
        .expect("Failed to build GraphQL client");
    AppState::with_client(config, graphql)
}
