//! Run command: the full populate, report, and search session

use super::views::{self, View};
use nu_enroll::config::Config;
use nu_enroll::core::report::{TextReporter, ViewReporter};
use nu_enroll::core::store::Store;
use std::path::Path;

/// Populate the store, print both views at `threshold`, then every search
///
/// # Errors
/// Stops at the first failing step and returns its message.
pub fn run(
    data_dir: Option<&Path>,
    threshold: i64,
    searches: &[String],
    store: &Store,
    config: &Config,
) -> Result<(), String> {
    super::populate::run(data_dir, store, config)?;

    for view in [View::Enrollment, View::Popularity] {
        let series = views::series(view, store, threshold)?;
        println!("\n{}", TextReporter.render(&series));
    }

    super::search::run(searches, store)
}
