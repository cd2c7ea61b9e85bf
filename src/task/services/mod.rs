//! Orchestration services for the task core.

mod tasks;

pub use tasks::{
    CREATE_MAX_REQUESTS, CREATE_WINDOW_SECONDS, CreateTaskRequest, ListTasksRequest, TaskPage,
    TaskService, TaskServiceError, TaskServiceResult, TaskView,
};
