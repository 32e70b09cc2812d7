//! Fan-out isolation specs

use crate::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn failing_subscriber_does_not_starve_the_completion_subscriber() {
    let app = app();

    // A hostile handler registered alongside the real subscribers
    let failing = RecordingHandler::failing("simulated crash");
    app.bus.subscribe(
        Subscription::new(
            "hostile",
            vec![EventKind::LessonCompleted],
            "Always fails",
        ),
        Arc::new(failing.clone()),
    );

    app.service
        .enroll(student(), CourseId::new("c2"))
        .await
        .unwrap();
    app.service
        .mark_lesson_complete(student(), CourseId::new("c2"), LessonId::new("l2-1"))
        .await
        .unwrap();

    // The hostile handler ran and failed, yet course completion
    // derivation still happened
    assert_eq!(failing.count(), 1);
    assert_eq!(app.course_probe.count(), 1);
}

#[tokio::test]
async fn future_consumers_only_need_a_subscription() {
    let app = app();

    // e.g. a certificate issuer wired after the fact
    let certificates = RecordingHandler::new();
    app.bus.subscribe(
        Subscription::new(
            "certificates",
            vec![EventKind::CourseCompleted],
            "Issues certificates on course completion",
        ),
        Arc::new(certificates.clone()),
    );

    app.service
        .enroll(student(), CourseId::new("c2"))
        .await
        .unwrap();
    app.service
        .mark_lesson_complete(student(), CourseId::new("c2"), LessonId::new("l2-1"))
        .await
        .unwrap();

    assert_eq!(certificates.count(), 1);
    assert_eq!(certificates.received()[0].name(), "CourseCompleted");
}
