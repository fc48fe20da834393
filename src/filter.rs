//! Country filter
//!
//! Pure selection of dataset records by country name.

use crate::dataset::{CaseRecord, Dataset};

/// Filter records by country membership.
///
/// A non-empty selection returns exactly the records whose country is in
/// the selection, in load order, without deduplication. An empty selection
/// means "no filter" and returns the full record list. The caller owns the
/// returned copy.
pub fn filter(dataset: &Dataset, selection: &[String]) -> Vec<CaseRecord> {
    if selection.is_empty() {
        return dataset.records().to_vec();
    }

    dataset
        .records()
        .iter()
        .filter(|r| selection.iter().any(|s| s == &r.country))
        .cloned()
        .collect()
}
