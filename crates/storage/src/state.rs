// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized enrollment state from journal replay

use aula_core::{CourseId, Enrollment, Operation, StudentId};
use std::collections::HashMap;

/// Enrollment records indexed by (student, course)
#[derive(Debug, Default)]
pub struct EnrollmentState {
    enrollments: HashMap<(StudentId, CourseId), Enrollment>,
}

impl EnrollmentState {
    /// Rebuild state from replayed operations
    pub fn from_ops(ops: &[Operation]) -> Self {
        let mut state = Self::default();
        for op in ops {
            state.apply(op);
        }
        state
    }

    /// Get the enrollment for a (student, course) pair
    pub fn get(&self, student: &StudentId, course: &CourseId) -> Option<&Enrollment> {
        self.enrollments.get(&(student.clone(), course.clone()))
    }

    /// All enrollments for a student
    pub fn by_student(&self, student: &StudentId) -> Vec<Enrollment> {
        self.enrollments
            .values()
            .filter(|e| &e.student_id == student)
            .cloned()
            .collect()
    }

    /// Number of enrollment records
    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }

    /// Apply an operation to update the state
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::EnrollmentCreate { enrollment } => {
                self.enrollments.insert(
                    (enrollment.student_id.clone(), enrollment.course_id.clone()),
                    enrollment.clone(),
                );
            }

            Operation::ProgressUpdate {
                student_id,
                course_id,
                completed_lessons,
                progress,
                at,
            } => {
                if let Some(enrollment) = self
                    .enrollments
                    .get_mut(&(student_id.clone(), course_id.clone()))
                {
                    enrollment.completed_lessons = completed_lessons.clone();
                    enrollment.progress = *progress;
                    enrollment.last_accessed_at = *at;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
