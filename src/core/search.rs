//! Free-text search over the unified table
//!
//! The description goes to SQLite `LIKE` unescaped, so `%` and `_` act as
//! wildcards and ASCII letters compare case-insensitively. An empty
//! description matches every row through the name clause.

use std::fmt::Write;

use rusqlite::{params, Connection};

use crate::core::error::{EnrollError, Result};
use crate::core::models::SearchHit;
use crate::core::store::{table_exists, UNIFIED_TABLE};

/// Width of the left-justified name column
const NAME_WIDTH: usize = 30;
/// Width of the right-justified period column
const PERIOD_WIDTH: usize = 10;

/// Find offerings whose ID matches `description`, or whose name or period
/// contains it
///
/// Results are sorted by course ID ascending, then by period label
/// descending. The period order is plain string order on the label.
///
/// # Errors
/// Returns [`EnrollError::Query`] when `ClassData` does not exist.
pub fn search(conn: &Connection, description: &str) -> Result<Vec<SearchHit>> {
    if !table_exists(conn, UNIFIED_TABLE)? {
        return Err(EnrollError::Query(
            "unified table not built; run populate first".to_string(),
        ));
    }

    let mut stmt = conn.prepare(
        "SELECT ID, Name, Semester FROM ClassData
         WHERE ID LIKE ?1
            OR Name LIKE '%' || ?1 || '%'
            OR Semester LIKE '%' || ?1 || '%'
         ORDER BY ID ASC, Semester DESC",
    )?;
    let hits = stmt
        .query_map(params![description], |row| {
            Ok(SearchHit {
                course_id: row.get(0)?,
                name: row.get(1)?,
                period: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(hits)
}

/// Format search hits as a text table
///
/// A title line and a column header come first, then one line per hit:
/// the ID and a tab, the name padded to 30 characters (longer names are
/// kept whole), and the period right-aligned in 10 characters.
#[must_use]
pub fn format_search_results(hits: &[SearchHit]) -> String {
    let mut out = String::from("Search Results:\n");
    let _ = writeln!(
        out,
        "ID\t{:<NAME_WIDTH$}{:>PERIOD_WIDTH$}",
        "Name", "Semester"
    );
    for hit in hits {
        let _ = writeln!(
            out,
            "{}\t{:<NAME_WIDTH$}{:>PERIOD_WIDTH$}",
            hit.course_id, hit.name, hit.period
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseRecord;
    use crate::core::store::{consolidate, replace_period_table};

    fn catalog() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        replace_period_table(
            &mut conn,
            "Fall2020",
            &[
                CourseRecord::new("MATH101", 30, 25, "Calculus I"),
                CourseRecord::new("MATH150", 25, 20, "Linear Algebra"),
            ],
        )
        .unwrap();
        replace_period_table(
            &mut conn,
            "Spring2021",
            &[
                CourseRecord::new("MATH101", 30, 28, "Calculus I"),
                CourseRecord::new("CS150", 40, 39, "Intro to CS"),
            ],
        )
        .unwrap();
        consolidate(&mut conn, &["Fall2020", "Spring2021"]).unwrap();
        conn
    }

    fn keys(hits: &[SearchHit]) -> Vec<(&str, &str)> {
        hits.iter()
            .map(|h| (h.course_id.as_str(), h.period.as_str()))
            .collect()
    }

    #[test]
    fn test_exact_id_returns_every_period() {
        let hits = search(&catalog(), "MATH101").unwrap();
        assert_eq!(
            keys(&hits),
            vec![("MATH101", "Spring2021"), ("MATH101", "Fall2020")]
        );
    }

    #[test]
    fn test_id_match_is_not_a_substring_match() {
        assert!(search(&catalog(), "MATH1").unwrap().is_empty());
    }

    #[test]
    fn test_name_and_period_substrings() {
        let conn = catalog();
        assert_eq!(keys(&search(&conn, "Algebra").unwrap()), vec![("MATH150", "Fall2020")]);
        assert_eq!(
            keys(&search(&conn, "2020").unwrap()),
            vec![("MATH101", "Fall2020"), ("MATH150", "Fall2020")]
        );
    }

    #[test]
    fn test_wildcards_pass_through() {
        let hits = search(&catalog(), "MATH1_1").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_like_is_ascii_case_insensitive() {
        assert_eq!(search(&catalog(), "calculus").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_description_matches_every_row() {
        let hits = search(&catalog(), "").unwrap();
        assert_eq!(
            keys(&hits),
            vec![
                ("CS150", "Spring2021"),
                ("MATH101", "Spring2021"),
                ("MATH101", "Fall2020"),
                ("MATH150", "Fall2020"),
            ]
        );
    }

    #[test]
    fn test_search_before_consolidation() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(matches!(search(&conn, "MATH101"), Err(EnrollError::Query(_))));
    }

    #[test]
    fn test_format_layout() {
        let hits = vec![SearchHit {
            course_id: "MATH101".to_string(),
            name: "Calculus I".to_string(),
            period: "F20".to_string(),
        }];
        let text = format_search_results(&hits);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Search Results:");
        assert_eq!(lines[1], format!("ID\tName{}Semester", " ".repeat(28)));
        assert_eq!(
            lines[2],
            format!("MATH101\tCalculus I{}{}F20", " ".repeat(20), " ".repeat(7))
        );
    }

    #[test]
    fn test_format_keeps_long_names_whole() {
        let long_name = "Special Topics in Computational Linguistics";
        let text = format_search_results(&[SearchHit {
            course_id: "CS499".to_string(),
            name: long_name.to_string(),
            period: "S21".to_string(),
        }]);
        assert!(text.contains(&format!("CS499\t{long_name}       S21")));
    }

    #[test]
    fn test_format_no_hits_is_header_only() {
        assert_eq!(format_search_results(&[]).lines().count(), 2);
    }
}
