//! Shared world state for task update BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskledger::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::OwnerId,
    services::{TaskService, TaskServiceError, TaskView},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task update behaviour tests.
pub struct TaskUpdateWorld {
    pub service: TestTaskService,
    pub owner: Option<OwnerId>,
    pub last_created: Option<TaskView>,
    pub last_update_result: Option<Result<TaskView, TaskServiceError>>,
    pub last_get_result: Option<Result<TaskView, TaskServiceError>>,
}

impl TaskUpdateWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::with_default_create_limit(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            owner: None,
            last_created: None,
            last_update_result: None,
            last_get_result: None,
        }
    }
}

impl Default for TaskUpdateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskUpdateWorld {
    TaskUpdateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
