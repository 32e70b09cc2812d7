// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Course completion subscriber
//!
//! Derives whole-course completion from single-lesson completions: on
//! every `LessonCompleted` it re-reads the enrollment and, at 100%
//! progress, publishes `CourseCompleted`. The event carries only ids,
//! never a progress snapshot, so the store stays the source of truth.

use async_trait::async_trait;
use aula_core::{
    Clock, DomainEvent, EnrollmentRepository, EventBus, EventHandler, EventKind, HandlerError,
    SubscriberId, Subscription,
};
use std::sync::Arc;

/// Handler that publishes `CourseCompleted` when progress reaches 100%
pub struct CourseCompletionSubscriber<R, K: Clock> {
    repo: R,
    bus: EventBus,
    clock: K,
}

impl<R, K> CourseCompletionSubscriber<R, K>
where
    R: EnrollmentRepository,
    K: Clock + 'static,
{
    /// One-time startup wiring: subscribe to `LessonCompleted`
    ///
    /// Returns the subscriber id so callers can unsubscribe.
    pub fn register(bus: &EventBus, repo: R, clock: K) -> SubscriberId {
        let subscription = Subscription::new(
            "course-completion",
            vec![EventKind::LessonCompleted],
            "Derives CourseCompleted from lesson completions",
        );
        let id = subscription.id.clone();
        bus.subscribe(
            subscription,
            Arc::new(Self {
                repo,
                bus: bus.clone(),
                clock,
            }),
        );
        id
    }
}

#[async_trait]
impl<R, K> EventHandler for CourseCompletionSubscriber<R, K>
where
    R: EnrollmentRepository,
    K: Clock + 'static,
{
    async fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        let DomainEvent::LessonCompleted {
            student_id,
            course_id,
            ..
        } = event
        else {
            return Ok(());
        };

        // Fresh read; the store is the authority on progress
        let enrollment = self
            .repo
            .find_by_student_and_course(student_id, course_id)
            .await?;

        let Some(enrollment) = enrollment else {
            // A completion event for a vanished enrollment should not
            // happen; log and move on rather than fail the dispatch.
            tracing::warn!(
                student = %student_id,
                course = %course_id,
                "lesson completed for unknown enrollment"
            );
            return Ok(());
        };

        if !enrollment.is_complete() {
            return Ok(());
        }

        tracing::debug!(student = %student_id, course = %course_id, "course completed");
        self.bus
            .publish(DomainEvent::course_completed(
                student_id.clone(),
                course_id.clone(),
                &self.clock,
            ))
            .await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "subscriber_tests.rs"]
mod tests;
