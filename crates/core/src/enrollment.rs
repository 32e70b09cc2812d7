// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enrollment entity and its progress state machine
//!
//! An enrollment links one student to one course and tracks which
//! lessons are done. The only mutation is `complete_lesson`, which is
//! idempotent per lesson id and keeps the progress invariant:
//! `progress == round(100 * completed / total)`.

use crate::clock::Clock;
use crate::course::{CourseId, LessonId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a student
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Percentage progress for a completed-lesson count
///
/// Standard rounding (half up), never truncation. A course with no
/// lessons reports zero progress.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// The record linking one student to one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: StudentId,
    pub course_id: CourseId,
    /// Completed lesson ids; order is insertion order, duplicates never appended
    pub completed_lessons: Vec<LessonId>,
    /// Integer percentage, 0..=100
    pub progress: u8,
    pub enrolled_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

/// Result of applying a lesson completion to an enrollment
#[derive(Debug, Clone)]
pub enum LessonCompletion {
    /// The lesson was already recorded; state is unchanged
    AlreadyCompleted(Enrollment),
    /// The lesson is newly recorded; state carries the updated record
    Completed(Enrollment),
}

impl LessonCompletion {
    pub fn into_enrollment(self) -> Enrollment {
        match self {
            Self::AlreadyCompleted(e) | Self::Completed(e) => e,
        }
    }
}

impl Enrollment {
    /// Create a fresh zero-progress enrollment
    pub fn new(
        id: impl Into<String>,
        student_id: StudentId,
        course_id: CourseId,
        clock: &impl Clock,
    ) -> Self {
        let now = clock.now();
        Self {
            id: id.into(),
            student_id,
            course_id,
            completed_lessons: Vec::new(),
            progress: 0,
            enrolled_at: now,
            last_accessed_at: now,
        }
    }

    /// Whether the lesson is already recorded as complete
    pub fn is_lesson_completed(&self, lesson: &LessonId) -> bool {
        self.completed_lessons.contains(lesson)
    }

    /// Record a lesson completion
    ///
    /// Idempotent: a lesson already in `completed_lessons` leaves the
    /// record untouched. A new lesson appends, recomputes the progress
    /// percentage against `total_lessons`, and refreshes the
    /// last-accessed timestamp.
    pub fn complete_lesson(
        mut self,
        lesson: LessonId,
        total_lessons: usize,
        clock: &impl Clock,
    ) -> LessonCompletion {
        if self.is_lesson_completed(&lesson) {
            return LessonCompletion::AlreadyCompleted(self);
        }

        self.completed_lessons.push(lesson);
        self.progress = progress_percent(self.completed_lessons.len(), total_lessons);
        self.last_accessed_at = clock.now();
        LessonCompletion::Completed(self)
    }

    /// Whether every lesson of the course is complete
    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }
}

#[cfg(test)]
#[path = "enrollment_tests.rs"]
mod tests;
