//! Enrollment and popularity command handlers

use crate::args::ViewArgs;
use nu_enroll::config::Config;
use nu_enroll::core::report::{reporter_for, ViewSeries};
use nu_enroll::core::store::Store;
use nu_enroll::{error, info};
use std::path::PathBuf;

/// Which aggregate view to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Total enrollment per course
    Enrollment,
    /// Enrollment over capacity per course
    Popularity,
}

impl View {
    const fn file_stem(self) -> &'static str {
        match self {
            Self::Enrollment => "enrollment",
            Self::Popularity => "popularity",
        }
    }
}

/// Compute a view at `threshold`
///
/// # Errors
/// Returns a message if the query fails.
pub fn series(view: View, store: &Store, threshold: i64) -> Result<ViewSeries, String> {
    let result = match view {
        View::Enrollment => store
            .enrollment_by_course(threshold)
            .map(|rows| ViewSeries::enrollment(&rows, threshold)),
        View::Popularity => store
            .popularity_by_course(threshold)
            .map(|rows| ViewSeries::popularity(&rows, threshold)),
    };
    result.map_err(|e| {
        error!("{} view failed: {e}", view.file_stem());
        format!("✗ Failed to compute {} view: {e}", view.file_stem())
    })
}

/// Print or write one aggregate view
///
/// # Errors
/// Returns a message if the query fails or the output cannot be written.
pub fn run(view: View, args: &ViewArgs, store: &Store, config: &Config) -> Result<(), String> {
    let threshold = args.threshold.unwrap_or(config.query.threshold);
    let series = series(view, store, threshold)?;
    let reporter = reporter_for(args.format);

    let output_path: Option<PathBuf> = if args.save {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        Some(reports_dir.join(format!("{}.{}", view.file_stem(), args.format.extension())))
    } else {
        args.output.clone()
    };

    match output_path {
        Some(path) => {
            reporter
                .generate(&series, &path)
                .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
            println!("✓ View written to: {}", path.display());
            info!("Wrote {} view to {}", view.file_stem(), path.display());
        }
        None => print!("{}", reporter.render(&series)),
    }
    Ok(())
}
