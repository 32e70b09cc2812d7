//! Shared fixture for behavioral specs

pub use aula_core::{
    Course, CourseId, EventBus, EventKind, FakeClock, Lesson, LessonId, RecordingHandler,
    SequentialIdGen, StudentId, Subscription,
};
pub use aula_engine::{CourseCompletionSubscriber, EnrollmentService, EventLogHandler};
pub use aula_storage::{InMemoryCatalog, JsonStore};
use std::path::PathBuf;
use std::sync::Arc;

/// A wired application, as a server binary would assemble it at startup
pub struct App {
    pub service: EnrollmentService<JsonStore, InMemoryCatalog, FakeClock, SequentialIdGen>,
    pub store: JsonStore,
    pub bus: EventBus,
    pub lesson_probe: RecordingHandler,
    pub course_probe: RecordingHandler,
    pub journal_path: PathBuf,
    pub audit_path: PathBuf,
    dir: tempfile::TempDir,
}

impl App {
    /// Re-wire against the same journal, as after a process restart
    pub fn restart(self) -> App {
        let dir = self.dir;
        let journal_path = self.journal_path.clone();
        let audit_path = self.audit_path.clone();
        build(dir, journal_path, audit_path)
    }
}

/// Course c1 with four lessons, plus a single-lesson c2
pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        Course::new(
            "c1",
            "Intro to Rust",
            vec![
                Lesson::new("l1-1", "Getting started", "08:00"),
                Lesson::new("l1-2", "Ownership", "12:30"),
                Lesson::new("l1-3", "Traits", "10:15"),
                Lesson::new("l1-4", "Error handling", "09:45"),
            ],
        ),
        Course::new(
            "c2",
            "One-lesson course",
            vec![Lesson::new("l2-1", "Everything", "30:00")],
        ),
    ])
}

pub fn app() -> App {
    let dir = tempfile::tempdir().unwrap();
    let journal_path = dir.path().join("enrollments.journal");
    let audit_path = dir.path().join("events.log");
    build(dir, journal_path, audit_path)
}

fn build(dir: tempfile::TempDir, journal_path: PathBuf, audit_path: PathBuf) -> App {
    let store = JsonStore::open(&journal_path).unwrap();
    let bus = EventBus::new();
    let clock = FakeClock::new();

    // Startup wiring: all subscriptions before the first publish
    CourseCompletionSubscriber::register(&bus, store.clone(), clock.clone());
    EventLogHandler::register(&bus, audit_path.clone()).unwrap();

    let lesson_probe = RecordingHandler::new();
    bus.subscribe(
        Subscription::new(
            "spec-lesson-probe",
            vec![EventKind::LessonCompleted],
            "Spec probe for lesson completions",
        ),
        Arc::new(lesson_probe.clone()),
    );
    let course_probe = RecordingHandler::new();
    bus.subscribe(
        Subscription::new(
            "spec-course-probe",
            vec![EventKind::CourseCompleted],
            "Spec probe for course completions",
        ),
        Arc::new(course_probe.clone()),
    );

    let service = EnrollmentService::new(
        store.clone(),
        catalog(),
        bus.clone(),
        clock.clone(),
        SequentialIdGen::new("enr"),
    );

    App {
        service,
        store,
        bus,
        lesson_probe,
        course_probe,
        journal_path,
        audit_path,
        dir,
    }
}

pub fn student() -> StudentId {
    StudentId::new("student-1")
}

pub fn course_c1() -> CourseId {
    CourseId::new("c1")
}
