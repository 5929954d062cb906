//! Data models for `NuEnroll`

pub mod record;
pub mod view;

pub use record::{CourseRecord, UnifiedRecord};
pub use view::{ConsolidationSummary, EnrollmentRow, PopularityRow, SearchHit};
