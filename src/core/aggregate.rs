//! Aggregate views over the unified table, grouped by course

use rusqlite::{params, Connection};

use crate::core::error::{EnrollError, Result};
use crate::core::models::{EnrollmentRow, PopularityRow};
use crate::core::store::{table_exists, UNIFIED_TABLE};

/// Threshold used when the caller does not pick one
pub const DEFAULT_THRESHOLD: i64 = 1;

fn check_request(conn: &Connection, threshold: i64) -> Result<()> {
    if threshold < 0 {
        return Err(EnrollError::Query(format!(
            "threshold must be non-negative, got {threshold}"
        )));
    }
    if !table_exists(conn, UNIFIED_TABLE)? {
        return Err(EnrollError::Query(
            "unified table not built; run populate first".to_string(),
        ));
    }
    Ok(())
}

/// Total enrollment per course, highest first
///
/// Courses whose summed enrollment is below `threshold` are left out. Ties
/// are ordered by course ID.
///
/// # Errors
/// Returns [`EnrollError::Query`] for a negative threshold or when
/// `ClassData` does not exist.
pub fn enrollment_by_course(conn: &Connection, threshold: i64) -> Result<Vec<EnrollmentRow>> {
    check_request(conn, threshold)?;

    let mut stmt = conn.prepare(
        "SELECT ID, SUM(NumEnrl) AS TotalEnrl FROM ClassData
         GROUP BY ID
         HAVING TotalEnrl >= ?1
         ORDER BY TotalEnrl DESC, ID ASC",
    )?;
    let rows = stmt
        .query_map(params![threshold], |row| {
            Ok(EnrollmentRow {
                course_id: row.get(0)?,
                total_enrolled: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Enrollment-to-capacity ratio per course, most popular first
///
/// The threshold filters on total enrollment, not on the ratio. Courses
/// with zero total capacity have no defined ratio and are left out.
///
/// # Errors
/// Returns [`EnrollError::Query`] for a negative threshold or when
/// `ClassData` does not exist.
pub fn popularity_by_course(conn: &Connection, threshold: i64) -> Result<Vec<PopularityRow>> {
    check_request(conn, threshold)?;

    let mut stmt = conn.prepare(
        "SELECT ID,
                CAST(SUM(NumEnrl) AS REAL) / CAST(SUM(Size) AS REAL) AS Popularity,
                SUM(NumEnrl) AS TotalEnrl
         FROM ClassData
         GROUP BY ID
         HAVING TotalEnrl >= ?1 AND SUM(Size) > 0
         ORDER BY Popularity DESC, ID ASC",
    )?;
    let rows = stmt
        .query_map(params![threshold], |row| {
            Ok(PopularityRow {
                course_id: row.get(0)?,
                popularity: row.get(1)?,
                total_enrolled: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}
