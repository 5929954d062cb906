//! Search command handler

use nu_enroll::core::search::format_search_results;
use nu_enroll::core::store::Store;
use nu_enroll::{debug, error};

/// Run each description as its own search and print the result blocks
///
/// # Errors
/// Returns a message for the first search that fails.
pub fn run(descriptions: &[String], store: &Store) -> Result<(), String> {
    for description in descriptions {
        let hits = store.search(description).map_err(|e| {
            error!("Search for '{description}' failed: {e}");
            format!("✗ Search for '{description}' failed: {e}")
        })?;
        debug!("Search '{description}' matched {} rows", hits.len());
        println!("{}", format_search_results(&hits));
    }
    Ok(())
}
