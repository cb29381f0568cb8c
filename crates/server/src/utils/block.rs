// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Block number parsing and ordering.

use crate::types::Block;
use serde_json::Value;
use std::cmp::Reverse;

/// Parse a block number encoded as a `0x` hex string, a decimal string or a
/// JSON integer.
///
/// Returns `None` for anything else, including negative numbers and values
/// that do not fit in a `u128`.
pub fn parse_block_number(value: &Value) -> Option<u128> {
    match value {
        Value::Number(n) => n.as_u64().map(u128::from),
        Value::String(s) => {
            let s = s.trim();
            match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => u128::from_str_radix(hex, 16).ok(),
                None => s.parse::<u128>().ok(),
            }
        }
        _ => None,
    }
}

/// Sort blocks newest first. Equal heights keep their input order.
pub fn sort_blocks_descending(mut blocks: Vec<Block>) -> Vec<Block> {
    blocks.sort_by_key(|block| Reverse(block.height()));
    blocks
}
