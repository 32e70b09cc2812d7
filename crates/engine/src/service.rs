// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enrollment service: the authoritative progress state transition
//!
//! Marking a lesson complete persists the updated record before
//! publishing `LessonCompleted`, so subscribers re-reading the store
//! observe the new state. A lesson that is already complete is a
//! success no-op and publishes nothing.

use crate::error::EnrollError;
use aula_core::{
    Clock, CourseCatalog, CourseId, DomainEvent, Enrollment, EnrollmentRepository, EventBus,
    IdGen, LessonCompletion, LessonId, StudentId,
};

/// Application service for enrollment operations
pub struct EnrollmentService<R, C, K: Clock, I: IdGen> {
    repo: R,
    catalog: C,
    bus: EventBus,
    clock: K,
    id_gen: I,
}

impl<R, C, K, I> EnrollmentService<R, C, K, I>
where
    R: EnrollmentRepository,
    C: CourseCatalog,
    K: Clock,
    I: IdGen,
{
    pub fn new(repo: R, catalog: C, bus: EventBus, clock: K, id_gen: I) -> Self {
        Self {
            repo,
            catalog,
            bus,
            clock,
            id_gen,
        }
    }

    /// Enroll a student in a course at zero progress
    ///
    /// An existing enrollment is reported, never silently reused.
    pub async fn enroll(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<Enrollment, EnrollError> {
        if self.catalog.find(&course).await?.is_none() {
            return Err(EnrollError::CourseNotFound(course));
        }
        if self
            .repo
            .find_by_student_and_course(&student, &course)
            .await?
            .is_some()
        {
            return Err(EnrollError::AlreadyEnrolled(course));
        }

        let enrollment = Enrollment::new(self.id_gen.next(), student, course, &self.clock);
        let created = self.repo.create(enrollment).await?;
        tracing::debug!(
            student = %created.student_id,
            course = %created.course_id,
            "enrollment created"
        );
        Ok(created)
    }

    /// Mark a lesson complete for an enrollment
    ///
    /// Idempotent per lesson id: a repeat completion returns the
    /// current record and publishes nothing. A new completion persists
    /// the recomputed progress, then publishes `LessonCompleted`.
    /// A lesson id the course does not contain is rejected before any
    /// state change, so progress only ever counts real lessons.
    pub async fn mark_lesson_complete(
        &self,
        student: StudentId,
        course: CourseId,
        lesson: LessonId,
    ) -> Result<Enrollment, EnrollError> {
        let course_record = self
            .catalog
            .find(&course)
            .await?
            .ok_or_else(|| EnrollError::CourseNotFound(course.clone()))?;

        if !course_record.has_lesson(&lesson) {
            return Err(EnrollError::LessonNotFound { course, lesson });
        }

        let enrollment = self
            .repo
            .find_by_student_and_course(&student, &course)
            .await?
            .ok_or_else(|| EnrollError::EnrollmentNotFound {
                student: student.clone(),
                course: course.clone(),
            })?;

        let updated = match enrollment.complete_lesson(
            lesson.clone(),
            course_record.total_lessons(),
            &self.clock,
        ) {
            LessonCompletion::AlreadyCompleted(unchanged) => return Ok(unchanged),
            LessonCompletion::Completed(updated) => updated,
        };

        // Persist happens-before publish
        let persisted = self
            .repo
            .update_progress(
                &student,
                &course,
                updated.completed_lessons.clone(),
                updated.progress,
                updated.last_accessed_at,
            )
            .await?;

        self.bus
            .publish(DomainEvent::lesson_completed(
                student, course, lesson, &self.clock,
            ))
            .await;

        Ok(persisted)
    }

    /// The enrollment for a (student, course) pair, if any
    pub async fn enrollment(
        &self,
        student: &StudentId,
        course: &CourseId,
    ) -> Result<Option<Enrollment>, EnrollError> {
        Ok(self
            .repo
            .find_by_student_and_course(student, course)
            .await?)
    }

    /// All enrollments for a student
    pub async fn enrollments_for_student(
        &self,
        student: &StudentId,
    ) -> Result<Vec<Enrollment>, EnrollError> {
        Ok(self.repo.find_by_student(student).await?)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
