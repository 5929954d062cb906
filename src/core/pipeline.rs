//! End-to-end populate run: discover, load, build period tables, consolidate

use crate::core::error::{EnrollError, Result};
use crate::core::loader::{discover_period_sources, load_period_csv};
use crate::core::models::{ConsolidationSummary, CourseRecord};
use crate::core::store::{consolidate, replace_period_table, Store};
use crate::{debug, info};
use std::path::Path;

/// Rebuild every period table and `ClassData` from the CSV files in `data_dir`
///
/// All sources are parsed before the store is touched, so one malformed row
/// anywhere aborts the run with the previous tables intact.
///
/// # Errors
/// Returns [`EnrollError::Configuration`] when no `*.csv` sources are found,
/// [`EnrollError::Parse`] for the first malformed row, and store errors from
/// building or consolidating.
pub fn populate_store(store: &Store, data_dir: &Path) -> Result<ConsolidationSummary> {
    let sources = discover_period_sources(data_dir)?;
    if sources.is_empty() {
        return Err(EnrollError::Configuration(format!(
            "no period sources (*.csv) found in {}",
            data_dir.display()
        )));
    }
    debug!("Discovered {} period sources in {}", sources.len(), data_dir.display());

    let loaded = sources
        .into_iter()
        .map(|source| -> Result<(String, Vec<CourseRecord>)> {
            let records = load_period_csv(&source.path)?;
            info!("Loaded {} rows for period {}", records.len(), source.period);
            Ok((source.period, records))
        })
        .collect::<Result<Vec<_>>>()?;

    store.with_connection(|conn| {
        let mut summary = ConsolidationSummary::default();
        for (period, records) in &loaded {
            let rows = replace_period_table(conn, period, records)?;
            summary.periods.push((period.clone(), rows));
        }

        let periods: Vec<&str> = loaded.iter().map(|(p, _)| p.as_str()).collect();
        summary.unified_rows = consolidate(conn, &periods)?;
        info!(
            "Consolidated {} periods into {} unified rows",
            periods.len(),
            summary.unified_rows
        );
        Ok(summary)
    })
}
