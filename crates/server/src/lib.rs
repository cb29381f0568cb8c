// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod consts;
pub mod graphql;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;
