//! API client modules for external service integrations.
//!
//! clk talks to exactly one external service: the ClickUp REST API (v2).
//! The client covers the three calls the application needs:
//!
//! - fetch a task by its custom id
//! - list time entries, optionally filtered by a date range
//! - create a time entry
//!
//! All calls are one-shot and synchronous from the caller's point of view;
//! there is no session state, no retry and no rate-limit handling. A missing
//! task is signaled by the HTTP status and surfaces as `None`, not as an
//! error.

pub mod clickup;

pub use clickup::{ClickUp, RemoteTask, TaskRef, TimeEntry};
