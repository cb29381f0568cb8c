// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns a GraphQL fetch outcome into the home page view model.

use crate::consts::{FETCH_FAILED_MESSAGE, GRAPHQL_ERROR_PREFIX, TIMEOUT_MESSAGE};
use crate::graphql::{FetchError, FetchOutcome};
use crate::types::{Block, ViewModel};
use crate::utils::block::sort_blocks_descending;
use serde::Deserialize;
use serde_json::Value;

/// Build the view for `outcome`. Always returns a view; failures end up in
/// `ViewModel::error` with empty block and transaction lists.
pub fn normalize(outcome: &FetchOutcome) -> ViewModel {
    match outcome {
        FetchOutcome::Failure(FetchError::Timeout) => ViewModel::failed(TIMEOUT_MESSAGE),
        FetchOutcome::Failure(err) => {
            ViewModel::failed(format!("{}: {}", FETCH_FAILED_MESSAGE, err))
        }
        FetchOutcome::Success(payload) => normalize_payload(payload),
    }
}

fn normalize_payload(payload: &Value) -> ViewModel {
    // `data: null` is how GraphQL reports a failed operation, so only an
    // object counts as usable data.
    if let Some(data) = payload.get("data").and_then(Value::as_object) {
        let blocks = match data.get("Block") {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => match Vec::<Block>::deserialize(raw) {
                Ok(blocks) => blocks,
                Err(e) => {
                    tracing::error!(error = %e, "Malformed block list from DefraDB");
                    return ViewModel::failed(format!(
                        "{}: malformed block list: {}",
                        FETCH_FAILED_MESSAGE, e
                    ));
                }
            },
        };

        if let Some(errors) = payload.get("errors") {
            tracing::warn!(errors = %errors, "GraphQL errors alongside partial data");
        }

        let view = ViewModel::from_blocks(sort_blocks_descending(blocks));
        tracing::info!(
            "Found {} blocks and {} transactions",
            view.blocks.len(),
            view.transactions.len()
        );
        return view;
    }

    if let Some(errors) = payload.get("errors") {
        tracing::error!(errors = %errors, "GraphQL error");
        return ViewModel::failed(format!("{}: {}", GRAPHQL_ERROR_PREFIX, errors));
    }

    tracing::error!("No data returned from DefraDB");
    ViewModel::failed(FETCH_FAILED_MESSAGE)
}
