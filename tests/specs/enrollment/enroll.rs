//! Enrollment lifecycle specs

use crate::prelude::*;
use aula_engine::{ApiResponse, EnrollError};

#[tokio::test]
async fn enrolling_creates_a_zero_progress_record() {
    let app = app();

    let enrollment = app.service.enroll(student(), course_c1()).await.unwrap();

    assert_eq!(enrollment.progress, 0);
    assert!(enrollment.completed_lessons.is_empty());

    let found = app
        .service
        .enrollment(&student(), &course_c1())
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn double_enrollment_is_reported() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();

    let result = app.service.enroll(student(), course_c1()).await;
    assert!(matches!(result, Err(EnrollError::AlreadyEnrolled(_))));

    let response: ApiResponse<_> = result.into();
    assert!(response.data.is_none());
    assert_eq!(response.error.as_deref(), Some("already enrolled in course c1"));
}

#[tokio::test]
async fn marking_without_enrollment_reports_not_found_and_no_events() {
    let app = app();

    let result = app
        .service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-1"))
        .await;

    assert!(matches!(result, Err(EnrollError::EnrollmentNotFound { .. })));
    assert_eq!(app.lesson_probe.count(), 0);
    assert_eq!(app.course_probe.count(), 0);
}

#[tokio::test]
async fn listing_returns_every_enrollment_for_the_student() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();
    app.service
        .enroll(student(), CourseId::new("c2"))
        .await
        .unwrap();
    app.service
        .enroll(StudentId::new("student-2"), course_c1())
        .await
        .unwrap();

    let enrollments = app
        .service
        .enrollments_for_student(&student())
        .await
        .unwrap();
    assert_eq!(enrollments.len(), 2);
}
