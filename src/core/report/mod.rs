//! Export of aggregate views for external charting
//!
//! A view is handed to reporters as an ordered list of `(course, value)`
//! pairs. Reporters only lay the pairs out as tables; drawing a chart is up
//! to whichever tool consumes the output.

pub mod formats;

use crate::core::error::{EnrollError, Result};
use crate::core::models::{EnrollmentRow, PopularityRow};
use std::fmt;
use std::fs;
use std::path::Path;

pub use formats::{reporter_for, CsvReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Value attached to one course in a view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Whole number of students
    Count(i64),
    /// Ratio such as enrolled over capacity
    Ratio(f64),
}

impl MetricValue {
    /// Value as a float, e.g. for a chart axis
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(n) => n as f64,
            Self::Ratio(r) => r,
        }
    }

    /// Full-precision rendering used by machine-readable formats
    #[must_use]
    pub fn raw(self) -> String {
        match self {
            Self::Count(n) => n.to_string(),
            Self::Ratio(r) => r.to_string(),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Ratio(r) => write!(f, "{r:.4}"),
        }
    }
}

/// An aggregate view ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSeries {
    /// Human-readable title
    pub title: String,
    /// Header of the value column (the chart's x-axis label)
    pub value_label: &'static str,
    /// Ordered `(course ID, value)` pairs
    pub points: Vec<(String, MetricValue)>,
}

impl ViewSeries {
    /// Header of the label column (the chart's y-axis label)
    pub const LABEL_HEADER: &'static str = "Course ID";

    /// Series for the enrollment view
    #[must_use]
    pub fn enrollment(rows: &[EnrollmentRow], threshold: i64) -> Self {
        Self {
            title: format!("Total Course Enrollment (threshold {threshold})"),
            value_label: "Total Enrollment",
            points: rows
                .iter()
                .map(|r| (r.course_id.clone(), MetricValue::Count(r.total_enrolled)))
                .collect(),
        }
    }

    /// Series for the popularity view
    #[must_use]
    pub fn popularity(rows: &[PopularityRow], threshold: i64) -> Self {
        Self {
            title: format!("Course Popularity (threshold {threshold})"),
            value_label: "Popularity",
            points: rows
                .iter()
                .map(|r| (r.course_id.clone(), MetricValue::Ratio(r.popularity)))
                .collect(),
        }
    }
}

/// Trait for view renderers
pub trait ViewReporter {
    /// Render a view as a string
    fn render(&self, series: &ViewSeries) -> String;

    /// Render a view into a file
    ///
    /// # Errors
    /// Returns [`EnrollError::Io`] if the file cannot be written
    fn generate(&self, series: &ViewSeries, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.render(series)).map_err(|e| EnrollError::io(output_path, e))
    }
}
