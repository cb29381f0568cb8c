// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Block and transaction records as returned by the DefraDB `Block` collection.
//!
//! Scalar fields are kept as raw JSON values: the indexer stores some of them as
//! hex strings and others as integers, and the page shows whatever the store
//! returned. Missing fields decode as `null`.

use crate::utils::block::parse_block_number;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub hash: Value,
    #[serde(default)]
    pub number: Value,
    #[serde(default)]
    pub time: Value,
    #[serde(default)]
    pub gas_used: Value,
    #[serde(default)]
    pub gas_limit: Value,
    #[serde(default)]
    pub size: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Numeric block height used for ordering.
    ///
    /// Blocks whose number is missing or unparseable sort as height 0.
    pub fn height(&self) -> u128 {
        parse_block_number(&self.number).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub hash: Value,
    #[serde(default)]
    pub block_number: Value,
    #[serde(default)]
    pub from: Value,
    #[serde(default)]
    pub to: Value,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub gas: Value,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
