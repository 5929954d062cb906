//! CSV parser for per-period enrollment files
//!
//! Each file holds one header row followed by rows of
//! `CourseID,Capacity,Enrolled,Name`. Fields may be double-quoted to embed
//! commas or line breaks; a doubled quote inside a quoted field is a literal
//! quote.

use crate::core::error::{EnrollError, Result};
use crate::core::models::CourseRecord;
use std::fs;
use std::path::Path;

/// Number of leading fields every data row must provide
const REQUIRED_FIELDS: usize = 4;

/// Load the course records of one period file, skipping its header row
///
/// # Errors
/// Returns [`EnrollError::Io`] if the file cannot be read and
/// [`EnrollError::Parse`] for the first malformed row.
pub fn load_period_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| EnrollError::io(path, e))?;
    let source_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    parse_period_csv(&source_name, &content)
}

/// Parse period CSV content held in memory
///
/// `source_name` only labels errors. Blank lines are ignored and fields
/// beyond the fourth are dropped. A record that spans several lines is
/// reported at the line it starts on.
///
/// # Errors
/// Returns [`EnrollError::Parse`] if a row has fewer than four fields, a
/// count is not a non-negative integer, or a quoted field is never closed.
pub fn parse_period_csv(source_name: &str, content: &str) -> Result<Vec<CourseRecord>> {
    read_rows(source_name, content)?
        .into_iter()
        .skip(1)
        .filter(|row| !row.blank)
        .map(|row| parse_record(source_name, row))
        .collect()
}

/// One CSV record as read from the source, before any validation
#[derive(Debug)]
struct RawRow {
    /// 1-based line the record starts on
    line: usize,
    fields: Vec<String>,
    /// Nothing but whitespace between the line breaks
    blank: bool,
}

/// Split content into records, honoring double-quoted fields
///
/// Line breaks inside quotes belong to the field; outside quotes they end
/// the record. `\r\n` is treated like `\n`.
fn read_rows(source_name: &str, content: &str) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut blank = true;
    let mut line = 1;
    let mut start_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => {
                in_quotes = true;
                blank = false;
            }
            '\n' if in_quotes => {
                current.push('\n');
                line += 1;
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut current));
                rows.push(RawRow {
                    line: start_line,
                    fields: std::mem::take(&mut fields),
                    blank,
                });
                blank = true;
                line += 1;
                start_line = line;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                blank = false;
            }
            _ => {
                blank &= c.is_whitespace();
                current.push(c);
            }
        }
    }

    if in_quotes {
        return Err(EnrollError::parse(
            source_name,
            start_line,
            "quoted field is never closed",
        ));
    }
    if !fields.is_empty() || !current.is_empty() {
        fields.push(current);
        rows.push(RawRow {
            line: start_line,
            fields,
            blank,
        });
    }
    Ok(rows)
}

fn parse_record(source_name: &str, row: RawRow) -> Result<CourseRecord> {
    let RawRow {
        line: line_no,
        mut fields,
        ..
    } = row;
    if fields.len() < REQUIRED_FIELDS {
        return Err(EnrollError::parse(
            source_name,
            line_no,
            format!(
                "expected {REQUIRED_FIELDS} fields, found {}",
                fields.len()
            ),
        ));
    }
    fields.truncate(REQUIRED_FIELDS);

    let capacity = parse_count(source_name, line_no, "Capacity", &fields[1])?;
    let enrolled = parse_count(source_name, line_no, "Enrolled", &fields[2])?;
    let name = fields.pop().unwrap_or_default();
    let course_id = fields.swap_remove(0);

    Ok(CourseRecord {
        course_id,
        capacity,
        enrolled,
        name,
    })
}

fn parse_count(source_name: &str, line_no: usize, column: &str, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        EnrollError::parse(
            source_name,
            line_no,
            format!("{column} must be a non-negative integer, got '{raw}'"),
        )
    })
}
