// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the DefraDB GraphQL API.

mod client;
mod query;

pub use client::{FetchError, FetchOutcome, GraphqlClient};
pub use query::blocks_query;
