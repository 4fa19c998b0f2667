// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change feed routing changes to subscribers

use crate::subscription::{SubscriberId, Subscription};
use kb_core::Change;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// Sender for change delivery
pub type ChangeSender = mpsc::UnboundedSender<Change>;
/// Receiver for change delivery
pub type ChangeReceiver = mpsc::UnboundedReceiver<Change>;

/// Routes published changes to matching subscribers
#[derive(Clone, Default)]
pub struct ChangeFeed {
    subscribers: Arc<RwLock<HashMap<SubscriberId, (Subscription, ChangeSender)>>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to changes matching the subscription's patterns.
    /// Re-using an id replaces the earlier subscriber.
    pub fn subscribe(&self, subscription: Subscription) -> ChangeReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = subscription.id.clone();

        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.insert(id, (subscription, tx));

        rx
    }

    pub fn unsubscribe(&self, id: &SubscriberId) {
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.remove(id);
    }

    /// Deliver a change to every matching subscriber, dropping subscribers
    /// whose receiver has gone away
    pub fn publish(&self, change: &Change) {
        let name = change.name();
        let mut closed = Vec::new();

        {
            let subs = self.subscribers.read().unwrap_or_else(|e| e.into_inner());
            for (id, (subscription, tx)) in subs.iter() {
                if subscription.matches(name) && tx.send(change.clone()).is_err() {
                    closed.push(id.clone());
                }
            }
        }

        if !closed.is_empty() {
            let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
            for id in closed {
                tracing::debug!(subscriber = %id.0, "dropping closed subscriber");
                subs.remove(&id);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
