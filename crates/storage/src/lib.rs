//! aula-storage: Durable enrollment persistence
//!
//! Repository writes are expressed as operations, appended to a
//! JSON-lines journal, and replayed into materialized state on open.

pub mod catalog;
pub mod journal;
pub mod state;
pub mod store;

pub use catalog::InMemoryCatalog;
pub use journal::{Journal, JournalError};
pub use state::EnrollmentState;
pub use store::JsonStore;
