//! Port contracts for the task core.

mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
