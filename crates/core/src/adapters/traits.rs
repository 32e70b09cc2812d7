// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter trait definitions for persistence collaborators

use crate::course::{Course, CourseId, LessonId};
use crate::enrollment::{Enrollment, StudentId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no enrollment record for student {student} in course {course}")]
    MissingRecord { student: StudentId, course: CourseId },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Adapter for enrollment persistence
///
/// Implementations must provide read-your-writes consistency: a read
/// issued after a completed write observes that write. The progress
/// engine and the completion subscriber both depend on it.
#[async_trait]
pub trait EnrollmentRepository: Clone + Send + Sync + 'static {
    /// All enrollments for a student
    async fn find_by_student(&self, student: &StudentId) -> Result<Vec<Enrollment>, StorageError>;

    /// The enrollment for a (student, course) pair, if any
    async fn find_by_student_and_course(
        &self,
        student: &StudentId,
        course: &CourseId,
    ) -> Result<Option<Enrollment>, StorageError>;

    /// Persist a freshly created enrollment
    async fn create(&self, enrollment: Enrollment) -> Result<Enrollment, StorageError>;

    /// Replace the completion set and progress, refreshing the
    /// last-accessed time to `at`
    async fn update_progress(
        &self,
        student: &StudentId,
        course: &CourseId,
        completed_lessons: Vec<LessonId>,
        progress: u8,
        at: DateTime<Utc>,
    ) -> Result<Enrollment, StorageError>;
}

/// Adapter for course reference data
#[async_trait]
pub trait CourseCatalog: Clone + Send + Sync + 'static {
    /// Look up a course by id
    async fn find(&self, course: &CourseId) -> Result<Option<Course>, StorageError>;
}
