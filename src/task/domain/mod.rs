//! Domain model for the task lifecycle core.
//!
//! Pure business types with no infrastructure dependencies: validated field
//! newtypes, the status state machine, the priority order, partial-update
//! patches, and the read-time overdue predicate.

mod error;
mod fields;
mod ids;
pub mod overdue;
mod patch;
mod priority;
mod status;
mod task;

pub use error::{InvalidTransition, ParsePriorityError, ParseStatusError, TaskValidationError};
pub use fields::{TaskDescription, TaskTitle};
pub use ids::{OwnerId, TaskId};
pub use patch::{FieldUpdate, TaskPatch};
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
