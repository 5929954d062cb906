//! Core enrollment pipeline: loading, storage, consolidation, and queries

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod store;

pub use error::{EnrollError, Result};

/// Returns the current version of the `NuEnroll` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
