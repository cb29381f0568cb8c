// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// HTTP access log middleware.
///
/// Emits one event per request under the `http` target:
/// - DEBUG for 2xx/3xx responses
/// - WARN for 4xx responses
/// - ERROR for 5xx responses
///
/// Log format: "METHOD /path?query STATUS DURATIONms", e.g. "GET / 200 45ms"
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    log_request(&method, &path, response.status(), start.elapsed().as_millis());
    response
}

fn log_request(method: &Method, path: &str, status: StatusCode, duration_ms: u128) {
    let status_code = status.as_u16();

    if status.is_client_error() {
        tracing::warn!(
            target: "http",
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms",
            method,
            path,
            status_code,
            duration_ms
        );
    } else if status.is_server_error() {
        tracing::error!(
            target: "http",
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms",
            method,
            path,
            status_code,
            duration_ms
        );
    } else {
        tracing::debug!(
            target: "http",
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms",
            method,
            path,
            status_code,
            duration_ms
        );
    }
}
