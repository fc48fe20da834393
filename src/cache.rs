//! Memoized filter cache
//!
//! Wraps [`crate::filter::filter`] with a time-bounded cache so rapid UI
//! interactions on the same selection do not recompute the subset. One
//! instance lives in the shared application state for the whole process.

use crate::dataset::{CaseRecord, Dataset};
use crate::filter::filter;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default time-to-live for cached subsets.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct CacheEntry {
    records: Arc<Vec<CaseRecord>>,
    inserted_at: Instant,
}

/// TTL-memoized country filter.
///
/// The cache key is the selection list verbatim, so it is order- and
/// duplicate-sensitive: `["A","B"]` and `["B","A"]` occupy distinct
/// entries. There is no size bound and no manual eviction; entries simply
/// stop being served once older than the TTL and are overwritten on the
/// next lookup for their key.
pub struct FilterCache {
    dataset: Arc<Dataset>,
    ttl: Duration,
    entries: RwLock<HashMap<Vec<String>, CacheEntry>>,
}

impl FilterCache {
    /// Create a cache over an immutable dataset with the given TTL.
    pub fn new(dataset: Arc<Dataset>, ttl: Duration) -> Self {
        Self {
            dataset,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Compute-or-serve-cached filtered records for a selection.
    ///
    /// A fresh entry within the TTL is returned as-is; otherwise the
    /// subset is recomputed and the entry's timer resets. Concurrent
    /// misses on the same key may both compute; the filter is pure, so
    /// last-write-wins is observably identical.
    pub async fn get_filtered(&self, selection: &[String]) -> Arc<Vec<CaseRecord>> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(selection) {
                if entry.inserted_at.elapsed() < self.ttl {
                    return Arc::clone(&entry.records);
                }
            }
        }

        let records = Arc::new(filter(&self.dataset, selection));
        let mut entries = self.entries.write().await;
        entries.insert(
            selection.to_vec(),
            CacheEntry {
                records: Arc::clone(&records),
                inserted_at: Instant::now(),
            },
        );
        records
    }

    /// Number of distinct selection keys currently stored.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// The dataset this cache filters.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }
}
