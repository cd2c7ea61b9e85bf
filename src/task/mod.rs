//! Task lifecycle and query core.
//!
//! Implements the status state machine, partial-update semantics, the
//! filter/sort/pagination pipeline, and owner-scoped CRUD orchestration.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Query compilation in [`query`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;
