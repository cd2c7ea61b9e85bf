//! Taskledger: task lifecycle and query core for a personal task tracker.
//!
//! This crate provides the non-trivial heart of a task-tracking backend:
//! the status state machine, partial-update merge semantics, the
//! filter/sort/pagination pipeline, and per-key sliding-window rate
//! limiting. HTTP routing, credential handling, and the persistence engine
//! are external collaborators reached only through port traits.
//!
//! # Architecture
//!
//! Taskledger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, queries, and owner-scoped CRUD
//! - [`ratelimit`]: Sliding-window admission control

pub mod ratelimit;
pub mod task;
