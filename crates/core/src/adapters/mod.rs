// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter traits for persistence collaborators

pub mod fake;
pub mod traits;

// Re-export traits
pub use traits::{CourseCatalog, EnrollmentRepository, StorageError};

// Re-export fake adapters
pub use fake::{FakeStore, StoreCall};
