//! Error types for list-query compilation and pagination.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while compiling a list query or page request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskQueryError {
    /// The requested sort field is not in the whitelist.
    #[error("cannot sort by '{0}'")]
    InvalidSortField(String),

    /// The requested sort order is neither `asc` nor `desc`.
    #[error("invalid sort order '{0}', expected asc or desc")]
    InvalidSortOrder(String),

    /// The due-date range is inverted.
    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Lower bound of the rejected range.
        from: DateTime<Utc>,
        /// Upper bound of the rejected range.
        to: DateTime<Utc>,
    },

    /// The requested page number is below 1.
    #[error("page must be at least 1, got {0}")]
    InvalidPage(u64),

    /// The requested page size is outside the permitted range.
    #[error("page size must be between 1 and {max}, got {actual}")]
    InvalidPageSize {
        /// Largest permitted page size.
        max: u64,
        /// Rejected page size.
        actual: u64,
    },
}
