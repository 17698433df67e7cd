//! Gradebook error taxonomy.
//!
//! Every failure here is a local validation or lookup outcome. None are fatal;
//! the interactive shell decides how to present each one and keeps going.

use thiserror::Error;

use crate::model::Identity;

/// Errors the roster and its students can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// A grade outside the closed range [0, 100] was rejected at insertion.
    #[error("grade {value} is out of range (expected 0 to 100)")]
    GradeOutOfRange { value: f64 },

    /// A student with this identity is already registered.
    #[error("student '{0}' already exists")]
    DuplicateStudent(Identity),

    /// No student with this identity is registered.
    #[error("student '{0}' not found")]
    StudentNotFound(Identity),
}
