//! Populate command handler

use nu_enroll::config::Config;
use nu_enroll::core::models::ConsolidationSummary;
use nu_enroll::core::pipeline::populate_store;
use nu_enroll::core::store::Store;
use nu_enroll::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Directory to read semester files from: the argument, else config `data_dir`
pub fn resolve_data_dir(data_dir: Option<&Path>, config: &Config) -> PathBuf {
    data_dir.map_or_else(|| PathBuf::from(&config.paths.data_dir), Path::to_path_buf)
}

/// Rebuild the store from the semester files and report what was loaded
///
/// # Errors
/// Returns a message for any discovery, parse, or store failure.
pub fn run(data_dir: Option<&Path>, store: &Store, config: &Config) -> Result<ConsolidationSummary, String> {
    let data_dir = resolve_data_dir(data_dir, config);
    let summary = populate_store(store, &data_dir).map_err(|e| {
        error!("Populate failed for {}: {e}", data_dir.display());
        format!("✗ Failed to populate from {}: {e}", data_dir.display())
    })?;

    for (period, rows) in &summary.periods {
        verbose!("  {period}: {rows} rows");
    }
    println!(
        "✓ Loaded {} semesters ({} rows) into {}",
        summary.periods.len(),
        summary.unified_rows,
        store.path().display()
    );
    info!("Store populated: {}", store.path().display());
    Ok(summary)
}
