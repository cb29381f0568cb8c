// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Query for the `limit` most recent blocks together with their transactions.
pub fn blocks_query(limit: u32) -> String {
    format!(
        r#"query {{
    Block(limit: {limit}) {{
        hash
        number
        time
        gasUsed
        gasLimit
        size
        transactions {{
            hash
            blockNumber
            from
            to
            value
            gas
        }}
    }}
}}"#
    )
}
