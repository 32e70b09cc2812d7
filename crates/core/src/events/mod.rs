// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for loose coupling between domain components
//!
//! This module provides:
//! - `EventBus` - Dispatch published events to registered handlers
//! - `EventHandler` - Async reaction to a domain event
//! - `Subscription` - Typed registration keyed by event kind

mod bus;
mod handler;

pub use bus::EventBus;
pub use handler::{EventHandler, HandlerError, RecordingHandler, SubscriberId, Subscription};
