//! Task status values and transition validation.

use super::{InvalidTransition, ParseStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    #[default]
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Completed,
    /// Task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true when no further transition is permitted from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true when a change from this status to `requested` is legal.
    ///
    /// Total over the 4x4 status grid: only the terminal rows block, and a
    /// request equal to the current value is not a transition at all.
    #[must_use]
    pub fn can_transition_to(self, requested: Self) -> bool {
        !(self.is_terminal() && requested != self)
    }

    /// Validates a requested status change against the terminal-state rule.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the current status is terminal and
    /// the requested status differs from it.
    pub fn validate_transition(self, requested: Self) -> Result<(), InvalidTransition> {
        if self.can_transition_to(requested) {
            Ok(())
        } else {
            Err(InvalidTransition {
                from: self,
                to: requested,
            })
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
