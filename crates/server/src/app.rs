// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{handlers, logging, middleware as app_middleware, routes, state::AppState};
use axum::{Router, middleware};

/// Build the application router.
///
/// Layers run outermost first: access log, CORS headers, then the `OPTIONS`
/// short-circuit in front of every route and the fallback.
pub fn create_app(state: AppState) -> Router {
    let router = Router::new()
        .merge(routes::home::routes())
        .merge(routes::health::routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(app_middleware::preflight_middleware));

    app_middleware::with_cors_headers(router)
        .layer(middleware::from_fn(logging::http_logger_middleware))
        .with_state(state)
}
