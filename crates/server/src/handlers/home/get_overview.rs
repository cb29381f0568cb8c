// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::load_home_view;
use crate::state::AppState;
use crate::types::ViewModel;
use axum::{Json, extract::State};

/// Handler for GET /v1/overview
///
/// Same data as the home page, as JSON. Always answers 200; check the
/// `error` field for backend failures.
pub async fn get_overview(State(state): State<AppState>) -> Json<ViewModel> {
    Json(load_home_view(&state).await)
}
