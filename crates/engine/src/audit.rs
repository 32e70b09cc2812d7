// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event audit trail
//!
//! An ordinary bus subscriber that appends every published event to a
//! JSON-lines file. It is also the reference consumer of
//! `CourseCompleted`: certificate issuance or notifications would be
//! wired the same way.

use async_trait::async_trait;
use aula_core::{
    DomainEvent, EventBus, EventHandler, EventKind, HandlerError, SubscriberId, Subscription,
};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// A logged event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic sequence number
    pub sequence: u64,
    /// The event name
    pub name: String,
    /// The full event data
    pub event: DomainEvent,
}

/// Bus subscriber that records every event to an audit file
pub struct EventLogHandler {
    path: PathBuf,
    sequence: Mutex<u64>,
}

impl EventLogHandler {
    /// Open or create an audit log at the given path
    pub fn open(path: PathBuf) -> std::io::Result<Self> {
        // Count existing entries to continue the sequence
        let sequence = if path.exists() {
            let file = File::open(&path)?;
            BufReader::new(file).lines().count() as u64
        } else {
            0
        };

        Ok(Self {
            path,
            sequence: Mutex::new(sequence),
        })
    }

    /// Open the log and subscribe it to every event kind
    pub fn register(bus: &EventBus, path: PathBuf) -> std::io::Result<SubscriberId> {
        let handler = Self::open(path)?;
        let subscription = Subscription::new(
            "event-audit",
            vec![EventKind::LessonCompleted, EventKind::CourseCompleted],
            "Appends every event to the audit log",
        );
        let id = subscription.id.clone();
        bus.subscribe(subscription, std::sync::Arc::new(handler));
        Ok(id)
    }

    /// Read all recorded events from the log at `path`
    pub fn read_all(path: &std::path::Path) -> std::io::Result<Vec<EventRecord>> {
        if !path.exists() {
            return Ok(vec![]);
        }

        let file = File::open(path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let record: EventRecord = serde_json::from_str(&line)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            records.push(record);
        }
        Ok(records)
    }

    fn append(&self, event: &DomainEvent) -> std::io::Result<EventRecord> {
        let mut sequence = self.sequence.lock().unwrap_or_else(|e| e.into_inner());
        *sequence += 1;

        let record = EventRecord {
            sequence: *sequence,
            name: event.name().to_string(),
            event: event.clone(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let json = serde_json::to_string(&record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(file, "{}", json)?;

        Ok(record)
    }
}

#[async_trait]
impl EventHandler for EventLogHandler {
    async fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        self.append(event)
            .map(|_| ())
            .map_err(|e| HandlerError::new(format!("audit append failed: {}", e)))
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
