//! Discovery of per-period CSV sources in a data directory

use crate::core::error::{EnrollError, Result};
use crate::core::store::check_period_name;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extension recognized as a period source
pub const SOURCE_EXTENSION: &str = ".csv";

/// A period source found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSource {
    /// Period identifier, used as the period table name
    pub period: String,
    /// Path to the CSV file
    pub path: PathBuf,
}

/// Derive the period identifier from a source file name
///
/// The identifier is everything before the trailing `.csv`; names without
/// that suffix are not period sources.
#[must_use]
pub fn period_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(SOURCE_EXTENSION)
        .filter(|period| !period.is_empty())
}

/// List every `*.csv` file directly inside `dir`, sorted by file name
///
/// # Errors
/// Returns [`EnrollError::Configuration`] if the directory does not exist,
/// the glob pattern cannot be built, a period name is reserved (see
/// [`check_period_name`]), or two periods differ only by ASCII case. SQLite
/// table names ignore case, so such a pair would share one table.
pub fn discover_period_sources(dir: &Path) -> Result<Vec<PeriodSource>> {
    if !dir.is_dir() {
        return Err(EnrollError::Configuration(format!(
            "data directory not found: {}",
            dir.display()
        )));
    }

    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped_dir}/*{SOURCE_EXTENSION}");
    let entries = glob::glob(&pattern)
        .map_err(|e| EnrollError::Configuration(format!("bad source pattern {pattern}: {e}")))?;

    let mut sources = Vec::new();
    for path in entries.filter_map(std::result::Result::ok) {
        if !path.is_file() {
            continue;
        }
        let Some(period) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(period_from_file_name)
            .map(str::to_string)
        else {
            continue;
        };
        check_period_name(&period)?;
        sources.push(PeriodSource { period, path });
    }

    sources.sort_by(|a, b| a.period.cmp(&b.period));

    let mut seen: HashMap<String, &str> = HashMap::new();
    for source in &sources {
        if let Some(earlier) = seen.insert(source.period.to_ascii_lowercase(), &source.period) {
            return Err(EnrollError::Configuration(format!(
                "periods '{earlier}' and '{}' would share one table (names ignore case)",
                source.period
            )));
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_period_from_file_name_strips_suffix_only() {
        assert_eq!(period_from_file_name("F20.csv"), Some("F20"));
        // Character stripping would eat the leading "c" and "s" here
        assert_eq!(period_from_file_name("csSpring.csv"), Some("csSpring"));
        assert_eq!(period_from_file_name("notes.txt"), None);
        assert_eq!(period_from_file_name(".csv"), None);
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("S21.csv"), "h\n").unwrap();
        fs::write(dir.path().join("F20.csv"), "h\n").unwrap();
        fs::write(dir.path().join("readme.md"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let sources = discover_period_sources(dir.path()).unwrap();
        let periods: Vec<_> = sources.iter().map(|s| s.period.as_str()).collect();
        assert_eq!(periods, vec!["F20", "S21"]);
        assert_eq!(sources[0].path, dir.path().join("F20.csv"));
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(discover_period_sources(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_dir_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = discover_period_sources(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, EnrollError::Configuration(_)));
    }

    #[test]
    fn test_periods_differing_only_by_case_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("F20.csv"), "h\nA,10,5,Alpha\n").unwrap();
        fs::write(dir.path().join("f20.csv"), "h\nB,10,7,Beta\n").unwrap();
        if fs::read_dir(dir.path()).unwrap().count() < 2 {
            // Case-insensitive filesystem: the second write replaced the first
            return;
        }
        match discover_period_sources(dir.path()) {
            Err(EnrollError::Configuration(msg)) => {
                assert!(msg.contains("'F20'") && msg.contains("'f20'"), "{msg}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_sqlite_prefixed_period_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sqlite_F20.csv"), "h\n").unwrap();
        assert!(matches!(
            discover_period_sources(dir.path()),
            Err(EnrollError::Configuration(_))
        ));
    }

    #[test]
    fn test_reserved_period_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ClassData.csv"), "h\n").unwrap();
        assert!(matches!(
            discover_period_sources(dir.path()),
            Err(EnrollError::Configuration(_))
        ));
    }
}
