// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::load_home_view;
use crate::render;
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// Handler for GET /
///
/// Renders the latest blocks and their transactions as HTML. Always answers
/// 200; backend failures show up as an error banner on the page.
pub async fn get_home(State(state): State<AppState>) -> Html<String> {
    let view = load_home_view(&state).await;
    Html(render::home_page(&view))
}
