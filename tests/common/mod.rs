//! Shared helpers for integration tests.
//!
//! - `fixtures`: catalog JSON and an isolated `offerdash` command
//! - `log_capture`: collects `tracing` events emitted by library code

pub mod fixtures;
pub mod log_capture;
