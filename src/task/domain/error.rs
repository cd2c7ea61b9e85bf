//! Error types for task domain validation and parsing.

use super::TaskStatus;
use thiserror::Error;

/// Errors returned while validating caller-supplied task fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty or whitespace-only after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum length after trimming.
    #[error("task title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The description exceeds the maximum length.
    #[error("task description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },
}

/// Error returned when a status change would leave a terminal state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid status transition from {from} to {to}")]
pub struct InvalidTransition {
    /// Status the task currently holds.
    pub from: TaskStatus,
    /// Status the caller requested.
    pub to: TaskStatus,
}

/// Error returned while parsing status tokens from the wire or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing priority tokens from the wire or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
