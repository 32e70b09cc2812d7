// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Aula application layer: enrollment progress engine and event subscribers

mod audit;
mod error;
mod response;
mod service;
mod subscriber;

pub use audit::{EventLogHandler, EventRecord};
pub use error::EnrollError;
pub use response::ApiResponse;
pub use service::EnrollmentService;
pub use subscriber::CourseCompletionSubscriber;
