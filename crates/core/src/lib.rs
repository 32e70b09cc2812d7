//! aula-core: Core library for the Aula learning platform
//!
//! This crate provides:
//! - Domain entities for enrollments and courses
//! - Domain events and the in-process event bus
//! - Adapter traits for persistence collaborators
//! - Operation types replayed by the storage layer

pub mod clock;
pub mod id;

pub mod adapters;
pub mod events;

// Domain types (order matters for dependencies)
pub mod course;
pub mod enrollment;
pub mod event;
pub mod operation;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use course::{Course, CourseId, Lesson, LessonId};
pub use enrollment::{progress_percent, Enrollment, LessonCompletion, StudentId};
pub use event::{DomainEvent, EventKind};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use operation::Operation;

// Re-export the event bus
pub use events::{EventBus, EventHandler, HandlerError, RecordingHandler, SubscriberId, Subscription};

// Re-export adapter traits
pub use adapters::{CourseCatalog, EnrollmentRepository, FakeStore, StorageError, StoreCall};
