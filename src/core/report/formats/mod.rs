//! View report formats
//!
//! Provides renderers for plain text, CSV, and Markdown tables.

pub mod csv;
pub mod markdown;
pub mod text;

pub use self::csv::CsvReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

use super::ViewReporter;
use std::fmt;
use std::str::FromStr;

/// Supported view formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Aligned plain-text table
    #[default]
    Text,
    /// Comma-separated values with a header row
    Csv,
    /// Markdown table
    Markdown,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Csv => write!(f, "csv"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Renderer for the given format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ViewReporter> {
    match format {
        ReportFormat::Text => Box::new(TextReporter),
        ReportFormat::Csv => Box::new(CsvReporter),
        ReportFormat::Markdown => Box::new(MarkdownReporter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("TXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("csv".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_format_display_parses_back() {
        for format in [ReportFormat::Text, ReportFormat::Csv, ReportFormat::Markdown] {
            assert_eq!(format.to_string().parse::<ReportFormat>(), Ok(format));
        }
        assert_eq!(ReportFormat::Markdown.extension(), "md");
    }
}
