// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::state::AppState;
use crate::types::ViewModel;
use crate::utils::normalize;

/// Fetch the latest blocks from DefraDB and normalize them for display.
///
/// One outbound request per call. Never fails: fetch problems are reported
/// through `ViewModel::error`.
pub async fn load_home_view(state: &AppState) -> ViewModel {
    tracing::info!(endpoint = %state.graphql.endpoint(), "Fetching blocks from DefraDB...");

    let outcome = state.graphql.fetch(&state.home_query).await;
    normalize(&outcome)
}
