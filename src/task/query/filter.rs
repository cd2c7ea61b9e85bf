//! Filter criteria and compiled query specification for task lists.

use super::{SortField, SortOrder, TaskQueryError};
use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Optional filter criteria for a task list query.
///
/// Criteria combine with AND logic; an omitted criterion is simply not
/// applied. Owner scoping is not a filter concern: the service adds it to
/// every query unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    due_date_from: Option<DateTime<Utc>>,
    due_date_to: Option<DateTime<Utc>>,
}

impl TaskFilter {
    /// Creates an empty filter matching every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to due dates at or after the given instant.
    #[must_use]
    pub const fn with_due_date_from(mut self, from: DateTime<Utc>) -> Self {
        self.due_date_from = Some(from);
        self
    }

    /// Restricts results to due dates at or before the given instant.
    #[must_use]
    pub const fn with_due_date_to(mut self, to: DateTime<Utc>) -> Self {
        self.due_date_to = Some(to);
        self
    }

    /// Returns the status criterion, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority criterion, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the lower due-date bound, if any.
    #[must_use]
    pub const fn due_date_from(&self) -> Option<DateTime<Utc>> {
        self.due_date_from
    }

    /// Returns the upper due-date bound, if any.
    #[must_use]
    pub const fn due_date_to(&self) -> Option<DateTime<Utc>> {
        self.due_date_to
    }

    /// Returns true when the task satisfies every present criterion.
    ///
    /// Due-date bounds only match tasks that have a due date.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status() != status) {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| task.priority() != priority)
        {
            return false;
        }
        if let Some(from) = self.due_date_from
            && !task.due_date().is_some_and(|due| due >= from)
        {
            return false;
        }
        if let Some(to) = self.due_date_to
            && !task.due_date().is_some_and(|due| due <= to)
        {
            return false;
        }
        true
    }
}

/// Validated, ordered query specification ready for the storage layer.
///
/// Produced by [`CompiledQuery::compile`]; by construction the sort field is
/// whitelisted and the due-date range is coherent. The owner predicate is
/// composed in by the repository, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledQuery {
    filter: TaskFilter,
    sort_by: SortField,
    sort_order: SortOrder,
}

impl CompiledQuery {
    /// Compiles filter and sort parameters into a query specification.
    ///
    /// `sort_by` and `sort_order` default to `created_at` / `desc` when not
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::InvalidSortField`] or
    /// [`TaskQueryError::InvalidSortOrder`] for non-whitelisted sort
    /// parameters, and [`TaskQueryError::InvalidDateRange`] when both
    /// due-date bounds are present and inverted.
    pub fn compile(
        filter: TaskFilter,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Self, TaskQueryError> {
        if let (Some(from), Some(to)) = (filter.due_date_from, filter.due_date_to)
            && from > to
        {
            return Err(TaskQueryError::InvalidDateRange { from, to });
        }

        let sort_by = sort_by.map_or(Ok(SortField::default()), SortField::try_from)?;
        let sort_order = sort_order.map_or(Ok(SortOrder::default()), SortOrder::try_from)?;

        Ok(Self {
            filter,
            sort_by,
            sort_order,
        })
    }

    /// Returns the filter criteria.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the sort field.
    #[must_use]
    pub const fn sort_by(&self) -> SortField {
        self.sort_by
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Compares two tasks under this query's ordering.
    ///
    /// Ties break on task id so pagination is deterministic. Tasks without
    /// a due date sort after dated ones in either direction.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let directed = match self.sort_by {
            SortField::CreatedAt => self.direct(a.created_at().cmp(&b.created_at())),
            SortField::UpdatedAt => self.direct(a.updated_at().cmp(&b.updated_at())),
            SortField::Priority => self.direct(a.priority().cmp(&b.priority())),
            SortField::Status => self.direct(a.status().cmp(&b.status())),
            SortField::DueDate => self.compare_due_dates(a.due_date(), b.due_date()),
        };
        directed.then_with(|| a.id().cmp(&b.id()))
    }

    fn direct(&self, ordering: Ordering) -> Ordering {
        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    fn compare_due_dates(
        &self,
        a: Option<DateTime<Utc>>,
        b: Option<DateTime<Utc>>,
    ) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(lhs), Some(rhs)) => self.direct(lhs.cmp(&rhs)),
        }
    }
}
