//! Loading of per-period enrollment sources

pub mod csv_parser;
pub mod discovery;

pub use csv_parser::{load_period_csv, parse_period_csv};
pub use discovery::{discover_period_sources, period_from_file_name, PeriodSource};
