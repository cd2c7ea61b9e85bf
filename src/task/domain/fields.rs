//! Validated scalar field types for tasks.

use super::TaskValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task title: trimmed, 1 to 70 characters, never whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum title length in characters after trimming.
    pub const MAX_LENGTH: usize = 70;

    /// Creates a validated title from raw caller input.
    ///
    /// Leading and trailing whitespace is stripped before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTitle`] when the trimmed value is
    /// empty, or [`TaskValidationError::TitleTooLong`] when it exceeds
    /// [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskValidationError::TitleTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task description: at most 500 characters, never empty.
///
/// Absence of a description is modelled as `Option<TaskDescription>`; an
/// empty or whitespace-only input normalizes to `None` via [`Self::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Maximum description length in characters.
    pub const MAX_LENGTH: usize = 500;

    /// Normalizes raw caller input into an optional validated description.
    ///
    /// Empty and whitespace-only values become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::DescriptionTooLong`] when the value
    /// exceeds [`Self::MAX_LENGTH`] characters.
    pub fn from_raw(value: impl Into<String>) -> Result<Option<Self>, TaskValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let length = raw.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskValidationError::DescriptionTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Some(Self(raw)))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
