//! Read-time overdue predicate.

use super::TaskStatus;
use chrono::{DateTime, Utc};

/// Decides whether a task is overdue at the given instant.
///
/// A task with no due date is never overdue, and neither is a task in a
/// terminal status however far past its due date. `now` is injected so
/// callers control the reference instant.
#[must_use]
pub fn is_overdue(due_date: Option<DateTime<Utc>>, status: TaskStatus, now: DateTime<Utc>) -> bool {
    match due_date {
        None => false,
        Some(_) if status.is_terminal() => false,
        Some(due) => due < now,
    }
}
