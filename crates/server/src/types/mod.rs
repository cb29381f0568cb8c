// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod block;
mod view;

pub use block::{Block, Transaction};
pub use view::ViewModel;
