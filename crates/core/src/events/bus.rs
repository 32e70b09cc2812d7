// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing domain events to subscribers

use super::handler::{EventHandler, SubscriberId, Subscription};
use crate::event::DomainEvent;
use std::sync::{Arc, RwLock};
use tokio::task::JoinSet;

type Registration = (Subscription, Arc<dyn EventHandler>);

/// The event bus dispatches published events to matching handlers
///
/// The bus is an explicitly constructed handle; clones share state, so
/// one instance is created at startup and passed to every component
/// that publishes or subscribes. Registrations are kept in order and
/// never de-duplicated: the same handler registered twice is invoked
/// twice per publish.
pub struct EventBus {
    registry: Arc<RwLock<Vec<Registration>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a handler for the subscription's event kinds
    pub fn subscribe(&self, subscription: Subscription, handler: Arc<dyn EventHandler>) {
        let mut registry = self.registry.write().unwrap_or_else(|e| e.into_inner());
        registry.push((subscription, handler));
    }

    /// Remove every registration made under the given id
    pub fn unsubscribe(&self, id: &SubscriberId) {
        let mut registry = self.registry.write().unwrap_or_else(|e| e.into_inner());
        registry.retain(|(subscription, _)| &subscription.id != id);
    }

    /// Publish an event to all handlers registered for its kind
    ///
    /// Handlers run concurrently; the call returns once every handler
    /// has finished or failed. A failing or panicking handler is logged
    /// and never aborts its siblings. No registered handlers is a
    /// silent no-op.
    pub async fn publish(&self, event: DomainEvent) {
        // Snapshot under the read lock so a handler can publish
        // follow-up events without deadlocking.
        let matching: Vec<Registration> = {
            let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
            registry
                .iter()
                .filter(|(subscription, _)| subscription.matches(event.kind()))
                .cloned()
                .collect()
        };

        if matching.is_empty() {
            return;
        }

        tracing::debug!(
            event = event.name(),
            handlers = matching.len(),
            "publishing event"
        );

        let mut dispatch = JoinSet::new();
        for (subscription, handler) in matching {
            let event = event.clone();
            dispatch.spawn(async move {
                let result = handler.handle(&event).await;
                (subscription.id, result)
            });
        }

        while let Some(joined) = dispatch.join_next().await {
            match joined {
                Ok((_, Ok(()))) => {}
                Ok((id, Err(error))) => {
                    tracing::warn!(subscriber = %id.0, %error, "event handler failed");
                }
                Err(error) => {
                    tracing::warn!(%error, "event handler panicked");
                }
            }
        }
    }

    /// Count of active registrations
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// List all subscription IDs in registration order
    pub fn list_subscriptions(&self) -> Vec<SubscriberId> {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(subscription, _)| subscription.id.clone())
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
