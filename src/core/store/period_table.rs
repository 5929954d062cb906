//! Per-period tables: `ID TEXT, Size INTEGER, NumEnrl INTEGER, Name TEXT`

use rusqlite::{params, Connection};

use super::{quote_ident, UNIFIED_TABLE};
use crate::core::error::{EnrollError, Result};
use crate::core::models::CourseRecord;
use crate::debug;

/// Prefix SQLite keeps for its own tables
const SQLITE_RESERVED_PREFIX: &str = "sqlite_";

/// Check that `period` can name a period table
///
/// # Errors
/// Returns [`EnrollError::Configuration`] for an empty name, the unified
/// table's name, or a name using SQLite's reserved `sqlite_` prefix (all
/// compared ignoring ASCII case).
pub fn check_period_name(period: &str) -> Result<()> {
    if period.is_empty() {
        return Err(EnrollError::Configuration(
            "period name must not be empty".to_string(),
        ));
    }
    if period.eq_ignore_ascii_case(UNIFIED_TABLE) {
        return Err(EnrollError::Configuration(format!(
            "period name '{period}' is reserved for the unified table"
        )));
    }
    let reserved = period
        .get(..SQLITE_RESERVED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SQLITE_RESERVED_PREFIX));
    if reserved {
        return Err(EnrollError::Configuration(format!(
            "period name '{period}' uses the reserved '{SQLITE_RESERVED_PREFIX}' prefix"
        )));
    }
    Ok(())
}

/// Drop and recreate the table for `period`, then insert `records` in order
///
/// Runs in one transaction: readers see either the old table or the full
/// new one. Returns the number of rows inserted.
///
/// # Errors
/// Returns [`EnrollError::Configuration`] if [`check_period_name`] rejects
/// `period`, and [`EnrollError::Store`] for SQLite failures.
pub fn replace_period_table(
    conn: &mut Connection,
    period: &str,
    records: &[CourseRecord],
) -> Result<usize> {
    check_period_name(period)?;

    let table = quote_ident(period);
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {table};
         CREATE TABLE {table}(ID TEXT, Size INTEGER, NumEnrl INTEGER, Name TEXT);"
    ))?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {table} (ID, Size, NumEnrl, Name) VALUES (?1, ?2, ?3, ?4)"
        ))?;
        for record in records {
            stmt.execute(params![
                record.course_id,
                record.capacity,
                record.enrolled,
                record.name
            ])?;
        }
    }
    tx.commit()?;

    debug!("Replaced table {table} with {} rows", records.len());
    Ok(records.len())
}

/// Number of rows in `table`
///
/// # Errors
/// Returns an error if the table does not exist.
pub fn table_row_count(conn: &Connection, table: &str) -> Result<usize> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", quote_ident(table)),
        [],
        |row| row.get(0),
    )?;
    Ok(usize::try_from(count).unwrap_or_default())
}
