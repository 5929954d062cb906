//! CLI command handlers for `NuEnroll`.
//!
//! Each subcommand is implemented in its own submodule. Handlers return
//! `Err` with a printable message; the entry point decides the exit code.

pub mod config;
pub mod populate;
pub mod run;
pub mod search;
pub mod views;
