//! Task aggregate root.

use super::{
    InvalidTransition, OwnerId, TaskDescription, TaskId, TaskPatch, TaskPriority, TaskStatus,
    TaskTitle, overdue,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root: a user-owned to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: OwnerId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identity.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task owned by the given caller.
    ///
    /// Status is always `Pending` at creation; `created_at` and `updated_at`
    /// start equal, read from the injected clock.
    #[must_use]
    pub fn new(
        owner_id: OwnerId,
        title: TaskTitle,
        description: Option<TaskDescription>,
        priority: TaskPriority,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id,
            title,
            description,
            status: TaskStatus::Pending,
            priority,
            due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user's identity.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the task is overdue at the given instant.
    ///
    /// Never stored; derived from due date and status at read time.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        overdue::is_overdue(self.due_date, self.status, now)
    }

    /// Applies a partial update, refreshing `updated_at` on success.
    ///
    /// A requested status is validated against the terminal-state rule
    /// before any field is touched; on rejection the task is unchanged.
    /// Fields absent from the patch keep their current values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the patch requests a different
    /// status while the current one is terminal.
    pub fn apply_patch(
        &mut self,
        patch: &TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), InvalidTransition> {
        if let Some(requested) = patch.status() {
            self.status.validate_transition(requested)?;
        }

        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(update) = patch.description() {
            self.description = update.clone().into_value();
        }
        if let Some(requested) = patch.status() {
            self.status = requested;
        }
        if let Some(priority) = patch.priority() {
            self.priority = priority;
        }
        if let Some(update) = patch.due_date() {
            self.due_date = update.into_value();
        }

        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
