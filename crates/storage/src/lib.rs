// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Kebun storage: WAL-backed persistence for crops, locations and batches

mod state;
mod store;
mod traced;
mod wal;

pub use state::{MaterializedState, Row};
pub use store::{FarmStore, StoreError, VersionedBatch, WalStore};
pub use traced::TracedStore;
pub use wal::{Wal, WalEntry, WalError};
