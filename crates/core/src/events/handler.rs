// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handler trait and subscriptions

use crate::adapters::StorageError;
use crate::event::{DomainEvent, EventKind};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Error surfaced by a failing handler
///
/// Handler failures are logged by the bus and never propagate to the
/// publisher or to sibling handlers.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<StorageError> for HandlerError {
    fn from(err: StorageError) -> Self {
        Self(err.to_string())
    }
}

/// Async reaction to a published domain event
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
    async fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError>;
}

/// Subscriber handle for unsubscribing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

/// A registration for specific event kinds
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub kinds: Vec<EventKind>,
    pub description: String,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        kinds: Vec<EventKind>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: SubscriberId(id.into()),
            kinds,
            description: description.into(),
        }
    }

    /// Check if the subscription covers the event kind
    pub fn matches(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Recording handler for tests
///
/// Stores every received event and can be told to fail, for verifying
/// fan-out isolation and publish counts.
#[derive(Clone, Default)]
pub struct RecordingHandler {
    received: Arc<Mutex<Vec<DomainEvent>>>,
    fail_with: Option<String>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records the event and then reports failure
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(message.into()),
        }
    }

    /// Events received so far, in delivery order
    pub fn received(&self) -> Vec<DomainEvent> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    async fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
        match &self.fail_with {
            Some(message) => Err(HandlerError::new(message.clone())),
            None => Ok(()),
        }
    }
}
