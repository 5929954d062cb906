//! Course records as they appear in period sources and in the unified table

use serde::{Deserialize, Serialize};

/// One course offering within a single period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course identifier (e.g., "MATH101")
    pub course_id: String,

    /// Enrollment cap
    pub capacity: u32,

    /// Number of students who actually enrolled
    pub enrolled: u32,

    /// Course name (e.g., "Calculus I")
    pub name: String,
}

impl CourseRecord {
    /// Create a new course record
    #[must_use]
    pub fn new(
        course_id: impl Into<String>,
        capacity: u32,
        enrolled: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            capacity,
            enrolled,
            name: name.into(),
        }
    }

    /// Tag this record with the period it came from
    #[must_use]
    pub fn in_period(self, period: impl Into<String>) -> UnifiedRecord {
        UnifiedRecord {
            record: self,
            period: period.into(),
        }
    }
}

/// A course record tagged with its originating period (a `ClassData` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedRecord {
    /// The period-local record
    #[serde(flatten)]
    pub record: CourseRecord,

    /// Period label, stored in the `Semester` column
    pub period: String,
}
