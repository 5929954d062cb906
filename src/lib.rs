//! Shared library for `NuEnroll`
//! Consolidates per-semester enrollment CSVs into SQLite and answers
//! enrollment, popularity, and search queries over the result.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
