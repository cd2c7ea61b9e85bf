//! Unit tests for the task core.

mod support;
