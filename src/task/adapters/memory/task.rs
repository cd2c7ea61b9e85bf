//! In-memory task repository for tests and small deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{OwnerId, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    query::CompiledQuery,
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_error(err: impl ToString) -> TaskRepositoryError {
        TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
    }

    /// Collects the owner's tasks matching the query filter, unsorted.
    fn matching(state: &HashMap<TaskId, Task>, owner: &OwnerId, query: &CompiledQuery) -> Vec<Task> {
        state
            .values()
            .filter(|task| task.owner_id() == owner && query.filter().matches(task))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id_and_owner(
        &self,
        id: TaskId,
        owner: &OwnerId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(Self::lock_error)?;
        Ok(state
            .get(&id)
            .filter(|task| task.owner_id() == owner)
            .cloned())
    }

    async fn count_matching(
        &self,
        owner: &OwnerId,
        query: &CompiledQuery,
    ) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(Self::lock_error)?;
        let count = state
            .values()
            .filter(|task| task.owner_id() == owner && query.filter().matches(task))
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn query_page(
        &self,
        owner: &OwnerId,
        query: &CompiledQuery,
        offset: u64,
        limit: u64,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(Self::lock_error)?;
        let mut tasks = Self::matching(&state, owner, query);
        tasks.sort_by(|a, b| query.compare(a, b));

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(tasks.into_iter().skip(skip).take(take).collect())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        if !state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId, owner: &OwnerId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        let owned = state
            .get(&id)
            .is_some_and(|task| task.owner_id() == owner);
        if owned {
            state.remove(&id);
        }
        Ok(owned)
    }

    async fn delete_all_for_owner(&self, owner: &OwnerId) -> TaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        let before = state.len();
        state.retain(|_, task| task.owner_id() != owner);
        let removed = before.saturating_sub(state.len());
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}
