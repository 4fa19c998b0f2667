// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Kebun farm runtime
//!
//! Routes mutations through a [`kb_storage::FarmStore`], publishes one
//! [`kb_core::Change`] per successful write, and rebuilds the derived views
//! from fresh snapshots.

mod error;
mod farm;
mod feed;
mod subscription;

pub use error::FarmError;
pub use farm::{AdvanceOutcome, Dashboard, Farm, Snapshot};
pub use feed::{ChangeFeed, ChangeReceiver, ChangeSender};
pub use subscription::{ChangePattern, SubscriberId, Subscription};
