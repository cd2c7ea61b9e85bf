//! Service layer orchestrating task CRUD, queries, and rate limiting.

use crate::ratelimit::RateLimiter;
use crate::task::{
    domain::{
        InvalidTransition, OwnerId, Task, TaskDescription, TaskId, TaskPatch, TaskPriority,
        TaskStatus, TaskTitle, TaskValidationError,
    },
    ports::{TaskRepository, TaskRepositoryError},
    query::{CompiledQuery, PageRequest, TaskFilter, TaskQueryError},
};
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Requests admitted per owner per window for task creation.
pub const CREATE_MAX_REQUESTS: usize = 10;

/// Window length for the task-creation rate limit, in seconds.
pub const CREATE_WINDOW_SECONDS: i64 = 60;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksRequest {
    filter: TaskFilter,
    sort_by: Option<String>,
    sort_order: Option<String>,
    page: Option<u64>,
    page_size: Option<u64>,
}

impl ListTasksRequest {
    /// Creates a request with no filters and default sort and pagination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter criteria.
    #[must_use]
    pub const fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the sort field, validated against the whitelist at list time.
    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }

    /// Sets the 1-based page number.
    #[must_use]
    pub const fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Read representation of a task.
///
/// Carries every stored field plus `is_overdue`, which is derived from the
/// service clock at read time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Owning user's identity.
    pub owner_id: OwnerId,
    /// Title.
    pub title: TaskTitle,
    /// Description, if any.
    pub description: Option<TaskDescription>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the task was overdue at read time.
    pub is_overdue: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskView {
    /// Builds the read representation of a task at the given instant.
    #[must_use]
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id(),
            owner_id: task.owner_id().clone(),
            title: task.title().clone(),
            description: task.description().cloned(),
            status: task.status(),
            priority: task.priority(),
            due_date: task.due_date(),
            is_overdue: task.is_overdue(now),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPage {
    /// Tasks on this page, in query order.
    pub items: Vec<TaskView>,
    /// Total number of tasks matching the query across all pages.
    pub total: u64,
    /// 1-based page number that was requested.
    pub page: u64,
    /// Page size that was applied.
    pub page_size: u64,
    /// Total page count for `total` and `page_size`.
    pub total_pages: u64,
}

/// Service-level errors for task operations.
///
/// All variants are expected, caller-recoverable conditions except
/// [`TaskServiceError::Internal`], which wraps translated storage failures
/// without leaking engine detail into the message.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Caller-supplied field failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// Task missing, or owned by another caller; intentionally conflated.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Status change rejected by the terminal-state rule.
    #[error(transparent)]
    Transition(#[from] InvalidTransition),

    /// Partial update carried no fields.
    #[error("no fields to update")]
    NoFieldsToUpdate,

    /// List-query compilation or pagination rejected the request.
    #[error(transparent)]
    Query(#[from] TaskQueryError),

    /// Task creation throttled for this owner.
    #[error("rate limit exceeded, retry later")]
    RateLimitExceeded,

    /// Storage failure translated at the service boundary.
    #[error("internal storage error")]
    Internal(#[source] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns the stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Transition(_) => "invalid_status_transition",
            Self::NoFieldsToUpdate => "no_fields_to_update",
            Self::Query(TaskQueryError::InvalidSortField(_)) => "invalid_sort_field",
            Self::Query(TaskQueryError::InvalidDateRange { .. }) => "invalid_date_range",
            Self::Query(_) => "validation_error",
            Self::RateLimitExceeded => "rate_limit_exceeded",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Internal(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owner-scoped CRUD over an injected repository, with creation throttled
/// by a per-owner sliding-window limiter. Each operation is a short-lived
/// unit of work; concurrent updates to the same task follow last-write-wins
/// (no optimistic locking, accepted for this scale).
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    create_limiter: Arc<RateLimiter<C>>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with an explicit creation limiter.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        clock: Arc<C>,
        create_limiter: Arc<RateLimiter<C>>,
    ) -> Self {
        Self {
            repository,
            clock,
            create_limiter,
        }
    }

    /// Creates a service with the default creation limit of
    /// [`CREATE_MAX_REQUESTS`] per [`CREATE_WINDOW_SECONDS`].
    #[must_use]
    pub fn with_default_create_limit(repository: Arc<R>, clock: Arc<C>) -> Self {
        let create_limiter = Arc::new(RateLimiter::new(
            CREATE_MAX_REQUESTS,
            Duration::seconds(CREATE_WINDOW_SECONDS),
            Arc::clone(&clock),
        ));
        Self::new(repository, clock, create_limiter)
    }

    /// Creates a new pending task for the caller.
    ///
    /// Field validation runs before the rate limiter is consulted, and a
    /// limiter rejection performs no write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for a bad title or
    /// description, [`TaskServiceError::RateLimitExceeded`] when creation is
    /// throttled for this owner, or [`TaskServiceError::Internal`] when
    /// persistence fails.
    pub async fn create(
        &self,
        owner: &OwnerId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<TaskView> {
        let title = TaskTitle::new(request.title)?;
        let description = match request.description {
            Some(raw) => TaskDescription::from_raw(raw)?,
            None => None,
        };

        if !self.create_limiter.allow(owner.as_str()) {
            return Err(TaskServiceError::RateLimitExceeded);
        }

        let task = Task::new(
            owner.clone(),
            title,
            description,
            request.priority.unwrap_or_default(),
            request.due_date,
            &*self.clock,
        );
        self.repository.insert(&task).await?;
        Ok(self.view(&task))
    }

    /// Retrieves one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or belongs to another owner; the two cases are indistinguishable so
    /// ownership cannot be probed by id enumeration.
    pub async fn get(&self, owner: &OwnerId, id: TaskId) -> TaskServiceResult<TaskView> {
        let task = self
            .repository
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        Ok(self.view(&task))
    }

    /// Lists the caller's tasks with filtering, sorting, and pagination.
    ///
    /// A page past the end of the result set is a success carrying an empty
    /// items array and correct totals.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Query`] for a non-whitelisted sort
    /// field, an inverted date range, or out-of-range pagination, and
    /// [`TaskServiceError::Internal`] when persistence fails.
    pub async fn list(
        &self,
        owner: &OwnerId,
        request: ListTasksRequest,
    ) -> TaskServiceResult<TaskPage> {
        let query = CompiledQuery::compile(
            request.filter,
            request.sort_by.as_deref(),
            request.sort_order.as_deref(),
        )?;
        let pagination = PageRequest::new(
            request.page.unwrap_or(1),
            request.page_size.unwrap_or(PageRequest::DEFAULT_PAGE_SIZE),
        )?;

        let total = self.repository.count_matching(owner, &query).await?;
        let tasks = self
            .repository
            .query_page(owner, &query, pagination.offset(), pagination.limit())
            .await?;

        let now = self.clock.utc();
        let items = tasks
            .iter()
            .map(|task| TaskView::from_task(task, now))
            .collect();

        Ok(TaskPage {
            items,
            total,
            page: pagination.page(),
            page_size: pagination.page_size(),
            total_pages: pagination.total_pages(total),
        })
    }

    /// Applies a partial update to one of the caller's tasks.
    ///
    /// A requested status change is validated against the terminal-state
    /// rule before any field is applied; fields absent from the patch are
    /// untouched; `updated_at` is refreshed on success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NoFieldsToUpdate`] for an empty patch,
    /// [`TaskServiceError::NotFound`] per the ownership rule,
    /// [`TaskServiceError::Transition`] for a terminal-state violation, or
    /// [`TaskServiceError::Internal`] when persistence fails.
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: TaskId,
        patch: &TaskPatch,
    ) -> TaskServiceResult<TaskView> {
        if patch.is_empty() {
            return Err(TaskServiceError::NoFieldsToUpdate);
        }

        let mut task = self
            .repository
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        task.apply_patch(patch, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(self.view(&task))
    }

    /// Hard-deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] per the ownership rule, or
    /// [`TaskServiceError::Internal`] when persistence fails.
    pub async fn delete(&self, owner: &OwnerId, id: TaskId) -> TaskServiceResult<()> {
        let removed = self.repository.delete(id, owner).await?;
        if removed {
            Ok(())
        } else {
            Err(TaskServiceError::NotFound(id))
        }
    }

    /// Hard-deletes every task belonging to the owner.
    ///
    /// Invoked for the cascade when the external user-management
    /// collaborator signals account deletion. Returns the number removed;
    /// zero is a success, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Internal`] when persistence fails.
    pub async fn delete_all_for_owner(&self, owner: &OwnerId) -> TaskServiceResult<u64> {
        Ok(self.repository.delete_all_for_owner(owner).await?)
    }

    fn view(&self, task: &Task) -> TaskView {
        TaskView::from_task(task, self.clock.utc())
    }
}
