//! Explicit field-update set for partial task updates.

use super::{TaskDescription, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};

/// Update to a single nullable field.
///
/// Distinguishes "set the field to a value" from "clear the field"; a field
/// absent from the patch altogether is simply left out of [`TaskPatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Replace the field with the given value.
    Set(T),
    /// Remove the field's value.
    Clear,
}

impl<T> FieldUpdate<T> {
    /// Converts the update into the field's new stored value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }
}

/// Set of fields supplied by a partial update request.
///
/// Only fields the caller explicitly provided are present; everything else
/// is left untouched when the patch is applied (PATCH semantics, not PUT).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<FieldUpdate<TaskDescription>>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    due_date: Option<FieldUpdate<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(FieldUpdate::Set(description));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(FieldUpdate::Clear);
        self
    }

    /// Requests a status change.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets a new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets a new due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(FieldUpdate::Set(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(FieldUpdate::Clear);
        self
    }

    /// Returns true when no field is present in the patch.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }

    /// Returns the requested status change, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the new title, if supplied.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the description update, if supplied.
    #[must_use]
    pub const fn description(&self) -> Option<&FieldUpdate<TaskDescription>> {
        self.description.as_ref()
    }

    /// Returns the new priority, if supplied.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date update, if supplied.
    #[must_use]
    pub const fn due_date(&self) -> Option<FieldUpdate<DateTime<Utc>>> {
        self.due_date
    }
}
