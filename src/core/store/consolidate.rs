//! Builds the unified `ClassData` table from the period tables

use std::collections::HashSet;

use rusqlite::{params, Connection};

use super::{quote_ident, table_row_count, UNIFIED_TABLE};
use crate::core::error::{EnrollError, Result};
use crate::core::models::{CourseRecord, UnifiedRecord};
use crate::debug;

/// Drop and recreate `ClassData`, appending every row of each period table
/// tagged with its period name
///
/// Rows are appended one period at a time, so duplicates across periods are
/// kept. Returns the number of unified rows.
///
/// # Errors
/// Returns [`EnrollError::Configuration`] when `periods` is empty or names
/// the same table twice (table names ignore ASCII case), and
/// [`EnrollError::Store`] if a period table is missing. On error the
/// previous `ClassData` is left untouched.
pub fn consolidate<S: AsRef<str>>(conn: &mut Connection, periods: &[S]) -> Result<usize> {
    if periods.is_empty() {
        return Err(EnrollError::Configuration(
            "no period tables to consolidate".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = periods
        .iter()
        .map(|p| -> &str { p.as_ref() })
        .find(|p| !seen.insert(p.to_ascii_lowercase()))
    {
        return Err(EnrollError::Configuration(format!(
            "period table '{dup}' listed more than once"
        )));
    }

    let unified = quote_ident(UNIFIED_TABLE);
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {unified};
         CREATE TABLE {unified}(ID TEXT, Size INTEGER, NumEnrl INTEGER, Name TEXT, Semester TEXT);"
    ))?;

    for period in periods {
        let period = period.as_ref();
        let sql = format!(
            "INSERT INTO {unified} (ID, Size, NumEnrl, Name, Semester)
             SELECT ID, Size, NumEnrl, Name, ?1 FROM {}",
            quote_ident(period)
        );
        debug!("Consolidating period {period}");
        let appended = tx.execute(&sql, params![period])?;
        debug!("Appended {appended} rows from {period}");
    }

    let total = table_row_count(&tx, UNIFIED_TABLE)?;
    tx.commit()?;
    Ok(total)
}

/// Names of the period tables currently in the store, sorted
///
/// Every user table except `ClassData` counts as a period table.
///
/// # Errors
/// Returns an error if the schema cannot be read.
pub fn list_period_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND lower(name) <> lower(?1)
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([UNIFIED_TABLE], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
}

/// Every row of `ClassData`, ordered by period, then course, then remaining columns
///
/// # Errors
/// Returns [`EnrollError::Query`] if the unified table has not been built.
pub fn read_unified(conn: &Connection) -> Result<Vec<UnifiedRecord>> {
    if !super::table_exists(conn, UNIFIED_TABLE)? {
        return Err(EnrollError::Query(
            "unified table not built; run populate first".to_string(),
        ));
    }
    let mut stmt = conn.prepare(
        "SELECT ID, Size, NumEnrl, Name, Semester FROM ClassData
         ORDER BY Semester, ID, Name, Size, NumEnrl",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CourseRecord {
                course_id: row.get(0)?,
                capacity: row.get(1)?,
                enrolled: row.get(2)?,
                name: row.get(3)?,
            }
            .in_period(row.get::<_, String>(4)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}
