// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal-backed enrollment repository

use crate::journal::Journal;
use crate::state::EnrollmentState;
use async_trait::async_trait;
use aula_core::{
    CourseId, Enrollment, EnrollmentRepository, LessonId, Operation, StorageError, StudentId,
};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::{Arc, Mutex};

struct Inner {
    journal: Journal,
    state: EnrollmentState,
}

/// Durable enrollment repository over a JSON-lines journal
///
/// Writes append to the journal first and touch the in-memory state
/// only on success, so a failed write leaves no partial state. Journal
/// and state share one mutex, which gives read-your-writes to every
/// clone of the handle.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<Mutex<Inner>>,
}

impl JsonStore {
    /// Open the store, replaying any existing journal at `path`
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let ops = Journal::replay(path).map_err(io_or_json)?;
        let state = EnrollmentState::from_ops(&ops);
        let journal = Journal::open(path).map_err(io_or_json)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner { journal, state })),
        })
    }

    /// Number of enrollment records currently materialized
    pub fn record_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).state.len()
    }
}

fn io_or_json(err: crate::journal::JournalError) -> StorageError {
    match err {
        crate::journal::JournalError::Io(e) => StorageError::Io(e),
        crate::journal::JournalError::Json(e) => StorageError::Json(e),
    }
}

#[async_trait]
impl EnrollmentRepository for JsonStore {
    async fn find_by_student(&self, student: &StudentId) -> Result<Vec<Enrollment>, StorageError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.state.by_student(student))
    }

    async fn find_by_student_and_course(
        &self,
        student: &StudentId,
        course: &CourseId,
    ) -> Result<Option<Enrollment>, StorageError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.state.get(student, course).cloned())
    }

    async fn create(&self, enrollment: Enrollment) -> Result<Enrollment, StorageError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let op = Operation::EnrollmentCreate {
            enrollment: enrollment.clone(),
        };
        inner.journal.append(&op).map_err(io_or_json)?;
        inner.state.apply(&op);
        Ok(enrollment)
    }

    async fn update_progress(
        &self,
        student: &StudentId,
        course: &CourseId,
        completed_lessons: Vec<LessonId>,
        progress: u8,
        at: DateTime<Utc>,
    ) -> Result<Enrollment, StorageError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        if inner.state.get(student, course).is_none() {
            return Err(StorageError::MissingRecord {
                student: student.clone(),
                course: course.clone(),
            });
        }

        let op = Operation::ProgressUpdate {
            student_id: student.clone(),
            course_id: course.clone(),
            completed_lessons,
            progress,
            at,
        };
        inner.journal.append(&op).map_err(io_or_json)?;
        inner.state.apply(&op);

        inner
            .state
            .get(student, course)
            .cloned()
            .ok_or_else(|| StorageError::MissingRecord {
                student: student.clone(),
                course: course.clone(),
            })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
