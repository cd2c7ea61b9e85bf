//! Sort whitelist and ordering direction for task list queries.

use super::TaskQueryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whitelisted sortable fields.
///
/// The closed set exists so unconstrained field names never reach the
/// storage layer; anything outside it is rejected at compile time of the
/// query, before storage is touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Creation timestamp (the default).
    #[default]
    CreatedAt,
    /// Latest mutation timestamp.
    UpdatedAt,
    /// Due date; tasks without one sort last.
    DueDate,
    /// Priority by its total order.
    Priority,
    /// Lifecycle status by declaration order.
    Status,
}

impl SortField {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }

    /// All whitelisted fields.
    pub const ALL: [Self; 5] = [
        Self::CreatedAt,
        Self::UpdatedAt,
        Self::DueDate,
        Self::Priority,
        Self::Status,
    ];
}

impl TryFrom<&str> for SortField {
    type Error = TaskQueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            _ => Err(TaskQueryError::InvalidSortField(value.to_owned())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = TaskQueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(TaskQueryError::InvalidSortOrder(value.to_owned())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
