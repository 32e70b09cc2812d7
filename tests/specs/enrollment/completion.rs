//! Course completion specs
//!
//! The canonical flow: four lessons, progress 25/50/75/100, and exactly
//! one CourseCompleted on the final distinct lesson.

use crate::prelude::*;

#[tokio::test]
async fn full_course_flow_publishes_one_course_completed() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();

    // First lesson
    let enrollment = app
        .service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-1"))
        .await
        .unwrap();
    assert_eq!(enrollment.progress, 25);
    assert_eq!(app.lesson_probe.count(), 1);
    assert_eq!(app.course_probe.count(), 0);

    // Re-marking the same lesson changes nothing and publishes nothing
    let enrollment = app
        .service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-1"))
        .await
        .unwrap();
    assert_eq!(enrollment.progress, 25);
    assert_eq!(app.lesson_probe.count(), 1);

    // Remaining lessons climb to 100
    for (lesson, expected) in [("l1-2", 50), ("l1-3", 75), ("l1-4", 100)] {
        let enrollment = app
            .service
            .mark_lesson_complete(student(), course_c1(), LessonId::new(lesson))
            .await
            .unwrap();
        assert_eq!(enrollment.progress, expected);
    }

    // Exactly one course completion, for the right pair
    let completions = app.course_probe.received();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].student_id(), &student());
    assert_eq!(completions[0].course_id(), &course_c1());
    assert_eq!(app.lesson_probe.count(), 4);
}

#[tokio::test]
async fn no_course_completed_before_the_last_lesson() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();

    for lesson in ["l1-1", "l1-2", "l1-3"] {
        app.service
            .mark_lesson_complete(student(), course_c1(), LessonId::new(lesson))
            .await
            .unwrap();
    }

    assert_eq!(app.course_probe.count(), 0);
}

#[tokio::test]
async fn single_lesson_course_completes_immediately() {
    let app = app();
    app.service
        .enroll(student(), CourseId::new("c2"))
        .await
        .unwrap();

    let enrollment = app
        .service
        .mark_lesson_complete(student(), CourseId::new("c2"), LessonId::new("l2-1"))
        .await
        .unwrap();

    assert_eq!(enrollment.progress, 100);
    assert_eq!(app.course_probe.count(), 1);
}

#[tokio::test]
async fn lesson_outside_the_course_cannot_complete_it() {
    let app = app();
    app.service
        .enroll(student(), CourseId::new("c2"))
        .await
        .unwrap();

    let result = app
        .service
        .mark_lesson_complete(student(), CourseId::new("c2"), LessonId::new("not-a-lesson"))
        .await;

    assert!(matches!(
        result,
        Err(aula_engine::EnrollError::LessonNotFound { .. })
    ));
    assert_eq!(app.lesson_probe.count(), 0);
    assert_eq!(app.course_probe.count(), 0);

    let enrollment = app
        .service
        .enrollment(&student(), &CourseId::new("c2"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(enrollment.progress, 0);
}

#[tokio::test]
async fn progress_is_capped_by_the_course_lesson_list() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();

    app.service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l1-1"))
        .await
        .unwrap();
    let result = app
        .service
        .mark_lesson_complete(student(), course_c1(), LessonId::new("l9-9"))
        .await;

    assert!(matches!(
        result,
        Err(aula_engine::EnrollError::LessonNotFound { .. })
    ));
    let enrollment = app
        .service
        .enrollment(&student(), &course_c1())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(enrollment.progress, 25);
    assert_eq!(enrollment.completed_lessons.len(), 1);
}

#[tokio::test]
async fn audit_log_records_the_whole_event_stream() {
    let app = app();
    app.service.enroll(student(), course_c1()).await.unwrap();

    for lesson in ["l1-1", "l1-2", "l1-3", "l1-4"] {
        app.service
            .mark_lesson_complete(student(), course_c1(), LessonId::new(lesson))
            .await
            .unwrap();
    }

    let records = aula_engine::EventLogHandler::read_all(&app.audit_path).unwrap();
    // Four lesson completions plus one course completion
    assert_eq!(records.len(), 5);
    let course_events = records
        .iter()
        .filter(|r| r.name == "CourseCompleted")
        .count();
    assert_eq!(course_events, 1);
}
