//! Fake store implementation for testing

use super::traits::*;
use crate::course::{Course, CourseId, LessonId};
use crate::enrollment::{Enrollment, StudentId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded call to a store method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FindByStudent {
        student: String,
    },
    FindByStudentAndCourse {
        student: String,
        course: String,
    },
    CreateEnrollment {
        student: String,
        course: String,
    },
    UpdateProgress {
        student: String,
        course: String,
        progress: u8,
    },
    FindCourse {
        course: String,
    },
}

/// Shared state for the fake store
#[derive(Default)]
struct FakeState {
    enrollments: HashMap<(StudentId, CourseId), Enrollment>,
    courses: HashMap<CourseId, Course>,
    calls: Vec<StoreCall>,
    /// When set, every write fails with this message
    write_error: Option<String>,
}

/// Fake repository and catalog implementation
///
/// Implements both persistence ports over a shared in-memory map and
/// records every call for assertions.
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a course into the catalog
    pub fn insert_course(&self, course: Course) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.courses.insert(course.id.clone(), course);
    }

    /// Seed an enrollment record
    pub fn insert_enrollment(&self, enrollment: Enrollment) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.enrollments.insert(
            (enrollment.student_id.clone(), enrollment.course_id.clone()),
            enrollment,
        );
    }

    /// Make every subsequent write fail with the given message
    pub fn fail_writes(&self, message: impl Into<String>) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.write_error = Some(message.into());
    }

    /// All recorded calls, in order
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    fn record(&self, call: StoreCall) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(call);
    }
}

#[async_trait]
impl EnrollmentRepository for FakeStore {
    async fn find_by_student(&self, student: &StudentId) -> Result<Vec<Enrollment>, StorageError> {
        self.record(StoreCall::FindByStudent {
            student: student.0.clone(),
        });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state
            .enrollments
            .values()
            .filter(|e| &e.student_id == student)
            .cloned()
            .collect())
    }

    async fn find_by_student_and_course(
        &self,
        student: &StudentId,
        course: &CourseId,
    ) -> Result<Option<Enrollment>, StorageError> {
        self.record(StoreCall::FindByStudentAndCourse {
            student: student.0.clone(),
            course: course.0.clone(),
        });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state
            .enrollments
            .get(&(student.clone(), course.clone()))
            .cloned())
    }

    async fn create(&self, enrollment: Enrollment) -> Result<Enrollment, StorageError> {
        self.record(StoreCall::CreateEnrollment {
            student: enrollment.student_id.0.clone(),
            course: enrollment.course_id.0.clone(),
        });
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(message) = &state.write_error {
            return Err(StorageError::Backend(message.clone()));
        }
        state.enrollments.insert(
            (enrollment.student_id.clone(), enrollment.course_id.clone()),
            enrollment.clone(),
        );
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
        self.record(StoreCall::UpdateProgress {
            student: student.0.clone(),
            course: course.0.clone(),
            progress,
        });
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(message) = &state.write_error {
            return Err(StorageError::Backend(message.clone()));
        }
        let enrollment = state
            .enrollments
            .get_mut(&(student.clone(), course.clone()))
            .ok_or_else(|| StorageError::MissingRecord {
                student: student.clone(),
                course: course.clone(),
            })?;
        enrollment.completed_lessons = completed_lessons;
        enrollment.progress = progress;
        enrollment.last_accessed_at = at;
        Ok(enrollment.clone())
    }
}

#[async_trait]
impl CourseCatalog for FakeStore {
    async fn find(&self, course: &CourseId) -> Result<Option<Course>, StorageError> {
        self.record(StoreCall::FindCourse {
            course: course.0.clone(),
        });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.courses.get(course).cloned())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
