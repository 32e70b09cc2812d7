// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Course and lesson reference data
//!
//! Courses are owned by the catalog collaborator; the core only needs
//! them for the lesson count that drives the progress percentage.

use serde::{Deserialize, Serialize};

/// Unique identifier for a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a lesson within a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonId(pub String);

impl LessonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for LessonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single video lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    /// Display duration, e.g. "12:30"
    pub duration: String,
}

impl Lesson {
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            id: LessonId::new(id),
            title: title.into(),
            duration: duration.into(),
        }
    }
}

/// A course with its ordered lessons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

impl Course {
    pub fn new(id: impl Into<String>, title: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            id: CourseId::new(id),
            title: title.into(),
            lessons,
        }
    }

    /// Total lesson count used for the progress percentage
    pub fn total_lessons(&self) -> usize {
        self.lessons.len()
    }

    /// Whether the course contains the given lesson
    pub fn has_lesson(&self, lesson: &LessonId) -> bool {
        self.lessons.iter().any(|l| &l.id == lesson)
    }
}

#[cfg(test)]
#[path = "course_tests.rs"]
mod tests;
