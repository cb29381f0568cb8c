// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Service name attached to shipped log lines.
pub const SERVICE_NAME: &str = "block-explorer";

/// Banner shown when the GraphQL request exceeded its timeout.
pub const TIMEOUT_MESSAGE: &str = "Request to DefraDB timed out. The service might be busy.";

/// Banner shown when DefraDB returned nothing usable. Transport failures
/// append their reason after a colon.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data from DefraDB";

/// Prefix of the banner that embeds a GraphQL `errors` payload.
pub const GRAPHQL_ERROR_PREFIX: &str = "GraphQL Error";
