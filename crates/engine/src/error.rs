// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for enrollment operations

use aula_core::{CourseId, LessonId, StorageError, StudentId};
use thiserror::Error;

/// Errors reported by the enrollment service
#[derive(Debug, Error)]
pub enum EnrollError {
    #[error("enrollment not found for student {student} in course {course}")]
    EnrollmentNotFound { student: StudentId, course: CourseId },
    #[error("course not found: {0}")]
    CourseNotFound(CourseId),
    #[error("course {course} has no lesson {lesson}")]
    LessonNotFound { course: CourseId, lesson: LessonId },
    #[error("already enrolled in course {0}")]
    AlreadyEnrolled(CourseId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
