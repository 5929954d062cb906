//! Rows produced by aggregate views, searches, and consolidation runs

use serde::Serialize;

/// Total enrollment for one course across all periods
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRow {
    /// Course identifier
    pub course_id: String,
    /// Sum of enrolled students
    pub total_enrolled: i64,
}

/// Enrollment-to-capacity ratio for one course across all periods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularityRow {
    /// Course identifier
    pub course_id: String,
    /// `total_enrolled / total_capacity`
    pub popularity: f64,
    /// Sum of enrolled students, used for threshold filtering
    pub total_enrolled: i64,
}

/// One row returned by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Course identifier
    pub course_id: String,
    /// Course name
    pub name: String,
    /// Period the offering belongs to
    pub period: String,
}

/// Outcome of a populate run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidationSummary {
    /// Periods built, in build order, with their row counts
    pub periods: Vec<(String, usize)>,
    /// Rows in the unified table after consolidation
    pub unified_rows: usize,
}

impl ConsolidationSummary {
    /// Sum of rows across all period tables
    #[must_use]
    pub fn period_rows(&self) -> usize {
        self.periods.iter().map(|(_, rows)| rows).sum()
    }
}
