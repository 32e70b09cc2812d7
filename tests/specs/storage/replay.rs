//! Journal replay specs
//!
//! Progress must survive a process restart, and completion must still
//! derive correctly from replayed state.

use crate::prelude::*;

#[tokio::test]
async fn progress_survives_a_restart() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();
    app.service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-1"))
        .await
        .unwrap();
    app.service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-2"))
        .await
        .unwrap();

    let app = app.restart();

    let enrollment = app
        .service
        .enrollment(&student(), &course_c1())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(enrollment.progress, 50);
    assert_eq!(enrollment.completed_lessons.len(), 2);
}

#[tokio::test]
async fn course_completes_across_a_restart() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();
    for lesson in ["l1-1", "l1-2", "l1-3"] {
        app.service
            .mark_lesson_complete(student(), course_c1(), LessonId::new(lesson))
            .await
            .unwrap();
    }

    let app = app.restart();

    app.service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-4"))
        .await
        .unwrap();

    assert_eq!(app.course_probe.count(), 1);

    // Replayed lessons are still idempotent
    app.service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-2"))
        .await
        .unwrap();
    assert_eq!(app.lesson_probe.count(), 1);
    assert_eq!(app.course_probe.count(), 1);
}

#[tokio::test]
async fn restart_record_count_matches_enrollments() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();
    app.service
        .enroll(student(), CourseId::new("c2"))
        .await
        .unwrap();

    let app = app.restart();
    assert_eq!(app.store.record_count(), 2);
}
