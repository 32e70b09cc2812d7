// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations journaled by the storage layer
//!
//! Every repository write is expressed as an operation, appended to the
//! journal and replayed into materialized state on startup.

use crate::course::{CourseId, LessonId};
use crate::enrollment::{Enrollment, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A durable state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// A new zero-progress enrollment was created
    EnrollmentCreate { enrollment: Enrollment },

    /// An enrollment's completion set and progress changed
    ProgressUpdate {
        student_id: StudentId,
        course_id: CourseId,
        completed_lessons: Vec<LessonId>,
        progress: u8,
        /// Becomes the record's last-accessed time
        at: DateTime<Utc>,
    },
}
