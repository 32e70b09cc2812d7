// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory course catalog
//!
//! Course data is static reference data seeded at startup; the engine
//! only consumes it for lesson counts.

use async_trait::async_trait;
use aula_core::{Course, CourseCatalog, CourseId, StorageError};
use std::collections::HashMap;
use std::sync::Arc;

/// Seeded, read-only course catalog
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    courses: Arc<HashMap<CourseId, Course>>,
}

impl InMemoryCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(
                courses
                    .into_iter()
                    .map(|course| (course.id.clone(), course))
                    .collect(),
            ),
        }
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[async_trait]
impl CourseCatalog for InMemoryCatalog {
    async fn find(&self, course: &CourseId) -> Result<Option<Course>, StorageError> {
        Ok(self.courses.get(course).cloned())
    }
}
