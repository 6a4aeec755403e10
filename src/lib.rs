//! # Clk - ClickUp time-entry CLI
//!
//! A personal command-line assistant for recording work intervals against
//! ClickUp tasks, reviewing recent entries, and summarizing weekly hours.
//!
//! ## Features
//!
//! - **Entry Creation**: Shorthand syntaxes for clock ranges, relative
//!   offsets, and "since the last entry" intervals
//! - **Short Names**: A persistent cache mapping convenient names to
//!   ClickUp task identifiers, seeded automatically on first run
//! - **Recent Listing**: The past 30 days of entries in a table
//! - **Weekly Bins**: Hour totals and per-task breakdowns for the last
//!   five Sunday-to-Saturday weeks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
