// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Block, Transaction};
use serde::Serialize;
use serde_json::Value;

/// Render-ready aggregate for one home page view.
///
/// `transactions` is always the concatenation of each block's own
/// transactions, in block order. `logs` and `events` are reserved and
/// currently always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub blocks: Vec<Block>,
    pub transactions: Vec<Transaction>,
    pub logs: Vec<Value>,
    pub events: Vec<Value>,
    pub error: Option<String>,
}

impl ViewModel {
    /// Build a view from already ordered blocks, flattening their transactions.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let transactions = blocks
            .iter()
            .flat_map(|block| block.transactions.iter().cloned())
            .collect();

        Self {
            blocks,
            transactions,
            ..Default::default()
        }
    }

    /// An empty view carrying an error banner.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}
