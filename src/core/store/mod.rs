//! SQLite backing store: one table per period plus the unified `ClassData` table.
//!
//! A [`Store`] only remembers where the database lives. Every operation opens
//! its own connection and drops it before returning, on success and on error.

pub mod consolidate;
pub mod period_table;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use crate::core::error::{EnrollError, Result};
use crate::core::models::{CourseRecord, EnrollmentRow, PopularityRow, SearchHit};
use crate::core::{aggregate, search};

pub use consolidate::{consolidate, list_period_tables, read_unified};
pub use period_table::{check_period_name, replace_period_table, table_row_count};

/// Name of the unified table
pub const UNIFIED_TABLE: &str = "ClassData";

/// Quote a name for use as an SQL identifier
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Whether a table with the given name exists (case-insensitive, like SQLite)
///
/// # Errors
/// Returns an error if the schema cannot be read.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND lower(name) = lower(?1)",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Handle to a single-file enrollment database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a handle for the database at `path`; nothing is opened yet
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the database file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection, creating the file and its parent directory if needed
    ///
    /// # Errors
    /// Returns [`EnrollError::Configuration`] if the database cannot be opened.
    pub fn connect(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                EnrollError::Configuration(format!(
                    "cannot create store directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Connection::open(&self.path).map_err(|e| {
            EnrollError::Configuration(format!(
                "cannot open store {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Run `f` with a connection that is closed as soon as `f` returns
    ///
    /// # Errors
    /// Propagates connection failures and whatever `f` returns.
    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self.connect()?;
        f(&mut conn)
    }

    /// Replace the table of one period with `records`
    ///
    /// # Errors
    /// See [`replace_period_table`].
    pub fn replace_period(&self, period: &str, records: &[CourseRecord]) -> Result<usize> {
        self.with_connection(|conn| replace_period_table(conn, period, records))
    }

    /// Rebuild `ClassData` from the given periods
    ///
    /// # Errors
    /// See [`consolidate`].
    pub fn consolidate<S: AsRef<str>>(&self, periods: &[S]) -> Result<usize> {
        self.with_connection(|conn| consolidate(conn, periods))
    }

    /// Rebuild `ClassData` from every period table currently in the store
    ///
    /// # Errors
    /// Returns [`EnrollError::Configuration`] when the store holds no period tables.
    pub fn consolidate_stored(&self) -> Result<usize> {
        self.with_connection(|conn| {
            let periods = list_period_tables(conn)?;
            consolidate(conn, &periods)
        })
    }

    /// Total enrollment per course, see [`aggregate::enrollment_by_course`]
    ///
    /// # Errors
    /// Returns [`EnrollError::Query`] for a bad threshold or a missing unified table.
    pub fn enrollment_by_course(&self, threshold: i64) -> Result<Vec<EnrollmentRow>> {
        self.with_connection(|conn| aggregate::enrollment_by_course(conn, threshold))
    }

    /// Popularity per course, see [`aggregate::popularity_by_course`]
    ///
    /// # Errors
    /// Returns [`EnrollError::Query`] for a bad threshold or a missing unified table.
    pub fn popularity_by_course(&self, threshold: i64) -> Result<Vec<PopularityRow>> {
        self.with_connection(|conn| aggregate::popularity_by_course(conn, threshold))
    }

    /// Free-text search, see [`search::search`]
    ///
    /// # Errors
    /// Returns [`EnrollError::Query`] when the unified table is missing.
    pub fn search(&self, description: &str) -> Result<Vec<SearchHit>> {
        self.with_connection(|conn| search::search(conn, description))
    }
}
