//! Bounded per-symbol memoization cache.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use analysis_core::error::AnalysisError;
use analysis_core::types::AnalysisResult;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    result: AnalysisResult,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Store {
    entries: HashMap<String, Entry>,
    tick: u64,
}

/// Fixed-capacity LRU cache mapping normalized symbol to analysis result.
///
/// Recency is touched on both read and write. Entries are replaced
/// wholesale, never mutated in place, so concurrent readers only ever see a
/// complete result. Concurrent computations for the same key coalesce onto
/// one in-flight future via a per-key gate; different keys never block each
/// other on the gate, only for the short map accesses.
///
/// Entries do not expire by time. A symbol is recomputed only after eviction
/// or explicit invalidation, which trades staleness for cheap repeated
/// queries within a process lifetime.
pub struct AnalysisCache {
    capacity: usize,
    store: Mutex<Store>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AnalysisCache {
    /// Default number of distinct symbols retained.
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Create a cache holding at most `capacity` symbols.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            store: Mutex::new(Store::default()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached result if present; otherwise run `compute`, store
    /// the result under `key`, and return it.
    ///
    /// Callers racing on the same key share a single `compute` invocation.
    /// A failed computation is propagated to every waiter that reaches it
    /// and leaves no cache entry behind.
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &str,
        compute: F,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AnalysisResult, AnalysisError>>,
    {
        if let Some(hit) = self.get(key).await {
            debug!(symbol = key, "cache hit");
            return Ok(hit);
        }

        let gate = {
            let mut in_flight = self.in_flight.lock().await;
            in_flight
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = gate.lock().await;

        // A coalesced caller may have filled the entry while we waited.
        if let Some(hit) = self.get(key).await {
            debug!(symbol = key, "cache filled by concurrent caller");
            return Ok(hit);
        }

        let outcome = compute().await;
        self.in_flight.lock().await.remove(key);

        let result = outcome?;
        self.insert(key, result.clone()).await;
        Ok(result)
    }

    /// Look up a result, touching its recency.
    pub async fn get(&self, key: &str) -> Option<AnalysisResult> {
        let mut store = self.store.lock().await;
        store.tick += 1;
        let tick = store.tick;
        let entry = store.entries.get_mut(key)?;
        entry.last_used = tick;
        Some(entry.result.clone())
    }

    /// Store a result, evicting the least-recently-used entry when a new
    /// key would exceed capacity.
    pub async fn insert(&self, key: &str, result: AnalysisResult) {
        let mut store = self.store.lock().await;
        store.tick += 1;
        let tick = store.tick;

        if !store.entries.contains_key(key) && store.entries.len() >= self.capacity {
            let victim = store
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(k, _)| k.clone());
            if let Some(victim) = victim {
                debug!(symbol = %victim, "evicting least recently used entry");
                store.entries.remove(&victim);
            }
        }

        store.entries.insert(
            key.to_string(),
            Entry {
                result,
                last_used: tick,
            },
        );
    }

    /// Drop one symbol's entry. Returns whether it was present.
    pub async fn invalidate(&self, key: &str) -> bool {
        self.store.lock().await.entries.remove(key).is_some()
    }

    /// Drop all entries.
    pub async fn clear(&self) {
        self.store.lock().await.entries.clear();
    }

    /// Number of cached symbols.
    pub async fn len(&self) -> usize {
        self.store.lock().await.entries.len()
    }

    /// Check whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Maximum number of cached symbols.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::types::{IndicatorSnapshot, Signal};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn result_for(symbol: &str) -> AnalysisResult {
        AnalysisResult {
            symbol: symbol.to_string(),
            snapshot: IndicatorSnapshot::default(),
            signal: Signal::Hold,
        }
    }

    #[tokio::test]
    async fn test_get_or_compute_runs_once() {
        let cache = AnalysisCache::new(8);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let result = cache
                .get_or_compute("AAPL", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(result_for("AAPL"))
                })
                .await
                .unwrap();
            assert_eq!(result.symbol, "AAPL");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_compute_leaves_no_entry() {
        let cache = AnalysisCache::new(8);

        let outcome = cache
            .get_or_compute("ZZZZ", || async {
                Err(AnalysisError::NoData {
                    symbol: "ZZZZ".to_string(),
                })
            })
            .await;

        assert!(outcome.is_err());
        assert!(cache.is_empty().await);

        // The key is usable again after the failure
        let result = cache
            .get_or_compute("ZZZZ", || async { Ok(result_for("ZZZZ")) })
            .await
            .unwrap();
        assert_eq!(result.symbol, "ZZZZ");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_lru_eviction_beyond_capacity() {
        let cache = AnalysisCache::new(3);

        for symbol in ["A", "B", "C"] {
            cache.insert(symbol, result_for(symbol)).await;
        }

        // Touch A so B becomes the least recently used
        cache.get("A").await.unwrap();

        cache.insert("D", result_for("D")).await;

        assert_eq!(cache.len().await, 3);
        assert!(cache.get("B").await.is_none());
        assert!(cache.get("A").await.is_some());
        assert!(cache.get("C").await.is_some());
        assert!(cache.get("D").await.is_some());
    }

    #[tokio::test]
    async fn test_replacing_existing_key_does_not_evict() {
        let cache = AnalysisCache::new(2);

        cache.insert("A", result_for("A")).await;
        cache.insert("B", result_for("B")).await;
        cache.insert("A", result_for("A")).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("B").await.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_same_key_coalesces() {
        let cache = Arc::new(AnalysisCache::new(8));
        let calls = Arc::new(AtomicUsize::new(0));

        let compute = |calls: Arc<AtomicUsize>| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(result_for("AAPL"))
        };

        let (first, second) = tokio::join!(
            cache.get_or_compute("AAPL", || compute(calls.clone())),
            cache.get_or_compute("AAPL", || compute(calls.clone())),
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache = AnalysisCache::new(4);
        cache.insert("A", result_for("A")).await;
        cache.insert("B", result_for("B")).await;

        assert!(cache.invalidate("A").await);
        assert!(!cache.invalidate("A").await);
        assert_eq!(cache.len().await, 1);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
