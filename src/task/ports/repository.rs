//! Repository port for owner-scoped task persistence.

use crate::task::domain::{OwnerId, Task, TaskId};
use crate::task::query::CompiledQuery;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every lookup and mutation is owner-scoped: an id belonging to another
/// owner behaves exactly as if it did not exist, so implementations must
/// never distinguish the two cases in their return values.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by id, restricted to the given owner.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// owner.
    async fn find_by_id_and_owner(
        &self,
        id: TaskId,
        owner: &OwnerId,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Counts the owner's tasks matching the compiled query's filter.
    async fn count_matching(
        &self,
        owner: &OwnerId,
        query: &CompiledQuery,
    ) -> TaskRepositoryResult<u64>;

    /// Returns one page of the owner's tasks under the compiled query's
    /// filter and ordering.
    async fn query_page(
        &self,
        owner: &OwnerId,
        query: &CompiledQuery,
        offset: u64,
        limit: u64,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Hard-deletes a task, restricted to the given owner.
    ///
    /// Returns `false` when the task does not exist or belongs to another
    /// owner.
    async fn delete(&self, id: TaskId, owner: &OwnerId) -> TaskRepositoryResult<bool>;

    /// Hard-deletes every task belonging to the owner, returning the count.
    ///
    /// Supports the cascade triggered by the external user-management
    /// collaborator when an account is deleted.
    async fn delete_all_for_owner(&self, owner: &OwnerId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
