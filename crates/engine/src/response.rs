// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured operation results for the transport boundary
//!
//! Enrollment operations surface to callers as `{data, error}` with a
//! human-readable error string; which transport carries the payload is
//! not this crate's concern.

use crate::error::EnrollError;
use serde::Serialize;

/// Result payload: exactly one of `data` or `error` is set
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T> From<Result<T, EnrollError>> for ApiResponse<T> {
    fn from(result: Result<T, EnrollError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::err(error.to_string()),
        }
    }
}
