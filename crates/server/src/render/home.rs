// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTML rendering of the home view.

use crate::types::{Block, Transaction, ViewModel};
use crate::utils::{display_value, escape_html, parse_block_number, short_hash};
use serde_json::Value;

const STYLE: &str = r#"
        body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 32px; background: #f5f6f8; color: #222; }
        h1 { margin-bottom: 4px; }
        h2 { margin-top: 32px; }
        .subtitle { color: #666; margin-top: 0; }
        .error { background: #fdecea; border-left: 4px solid #d93025; padding: 12px 16px; border-radius: 4px; color: #8a1c13; }
        table { width: 100%; border-collapse: collapse; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
        th, td { padding: 8px 12px; border-bottom: 1px solid #eee; text-align: left; font-size: 14px; }
        th { background: #fafafa; font-weight: 600; }
        td.mono { font-family: "SFMono-Regular", Menlo, monospace; }
        td.empty { color: #888; text-align: center; }
"#;

/// Render the complete home page. Never fails: an empty view renders empty tables.
pub fn home_page(view: &ViewModel) -> String {
    let banner = view
        .error
        .as_deref()
        .map(|error| format!(r#"<div class="error" role="alert">{}</div>"#, escape_html(error)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Block Explorer</title>
    <style>{style}</style>
</head>
<body>
    <h1>Block Explorer</h1>
    <p class="subtitle">Latest blocks and transactions indexed in DefraDB</p>
    {banner}
    <h2>Blocks ({block_count})</h2>
    <table id="blocks">
        <thead>
            <tr><th>Number</th><th>Hash</th><th>Time</th><th>Gas Used</th><th>Gas Limit</th><th>Size</th><th>Txs</th></tr>
        </thead>
        <tbody>
{block_rows}
        </tbody>
    </table>
    <h2>Transactions ({tx_count})</h2>
    <table id="transactions">
        <thead>
            <tr><th>Hash</th><th>Block</th><th>From</th><th>To</th><th>Value</th><th>Gas</th></tr>
        </thead>
        <tbody>
{tx_rows}
        </tbody>
    </table>
</body>
</html>
"#,
        style = STYLE,
        banner = banner,
        block_count = view.blocks.len(),
        block_rows = rows(&view.blocks, block_row, 7, "No blocks found"),
        tx_count = view.transactions.len(),
        tx_rows = rows(&view.transactions, transaction_row, 6, "No transactions found"),
    )
}

fn rows<T>(items: &[T], row: fn(&T) -> String, columns: usize, empty: &str) -> String {
    if items.is_empty() {
        return format!(
            r#"            <tr><td class="empty" colspan="{}">{}</td></tr>"#,
            columns, empty
        );
    }

    items.iter().map(row).collect::<Vec<_>>().join("\n")
}

fn block_row(block: &Block) -> String {
    format!(
        "            <tr><td>{}</td>{}<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        number_cell(&block.number),
        hash_cell(&block.hash),
        text(&block.time),
        text(&block.gas_used),
        text(&block.gas_limit),
        text(&block.size),
        block.transactions.len(),
    )
}

fn transaction_row(tx: &Transaction) -> String {
    format!(
        "            <tr>{}<td>{}</td>{}{}<td>{}</td><td>{}</td></tr>",
        hash_cell(&tx.hash),
        number_cell(&tx.block_number),
        hash_cell(&tx.from),
        hash_cell(&tx.to),
        text(&tx.value),
        text(&tx.gas),
    )
}

fn text(value: &Value) -> String {
    escape_html(&display_value(value))
}

/// Decimal height, keeping the raw encoding in the tooltip.
fn number_cell(value: &Value) -> String {
    match parse_block_number(value) {
        Some(n) => format!(r#"<span title="{}">{}</span>"#, text(value), n),
        None => text(value),
    }
}

fn hash_cell(value: &Value) -> String {
    let full = display_value(value);
    format!(
        r#"<td class="mono" title="{}">{}</td>"#,
        escape_html(&full),
        escape_html(&short_hash(&full))
    )
}
