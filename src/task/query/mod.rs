//! List-query pipeline: filter compilation, sort whitelist, pagination.
//!
//! Everything here is pure computation; the compiled output is handed to
//! the repository port, which composes in the owner predicate.

mod error;
mod filter;
mod pagination;
mod sort;

pub use error::TaskQueryError;
pub use filter::{CompiledQuery, TaskFilter};
pub use pagination::PageRequest;
pub use sort::{SortField, SortOrder};
