// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain events for the Aula system
//!
//! Events are immutable facts stamped with the wall-clock time of the
//! occurrence. They carry enough identity for any subscriber to
//! re-derive state from the repository without the triggering request
//! context.

use crate::clock::Clock;
use crate::course::{CourseId, LessonId};
use crate::enrollment::StudentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag identifying an event variant, used for typed subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    LessonCompleted,
    CourseCompleted,
}

/// Facts published on the event bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainEvent {
    /// A specific lesson reached completion for a student
    LessonCompleted {
        student_id: StudentId,
        course_id: CourseId,
        lesson_id: LessonId,
        occurred_on: DateTime<Utc>,
    },

    /// All lessons of a course are complete for a student
    CourseCompleted {
        student_id: StudentId,
        course_id: CourseId,
        occurred_on: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Construct a lesson completion fact, stamped from the clock
    pub fn lesson_completed(
        student_id: StudentId,
        course_id: CourseId,
        lesson_id: LessonId,
        clock: &impl Clock,
    ) -> Self {
        Self::LessonCompleted {
            student_id,
            course_id,
            lesson_id,
            occurred_on: clock.now(),
        }
    }

    /// Construct a course completion fact, stamped from the clock
    pub fn course_completed(
        student_id: StudentId,
        course_id: CourseId,
        clock: &impl Clock,
    ) -> Self {
        Self::CourseCompleted {
            student_id,
            course_id,
            occurred_on: clock.now(),
        }
    }

    /// The variant tag for subscription matching
    pub fn kind(&self) -> EventKind {
        match self {
            Self::LessonCompleted { .. } => EventKind::LessonCompleted,
            Self::CourseCompleted { .. } => EventKind::CourseCompleted,
        }
    }

    /// Stable name for logs and audit records
    pub fn name(&self) -> &'static str {
        match self {
            Self::LessonCompleted { .. } => "LessonCompleted",
            Self::CourseCompleted { .. } => "CourseCompleted",
        }
    }

    pub fn student_id(&self) -> &StudentId {
        match self {
            Self::LessonCompleted { student_id, .. } | Self::CourseCompleted { student_id, .. } => {
                student_id
            }
        }
    }

    pub fn course_id(&self) -> &CourseId {
        match self {
            Self::LessonCompleted { course_id, .. } | Self::CourseCompleted { course_id, .. } => {
                course_id
            }
        }
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            Self::LessonCompleted { occurred_on, .. }
            | Self::CourseCompleted { occurred_on, .. } => *occurred_on,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
