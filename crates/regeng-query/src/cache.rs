//! Key-addressed value store with stale-while-revalidate reads.
//!
//! Per-key lifecycle: `empty → loading → fresh → stale → loading(background)
//! → fresh | error`. A fresh hit never touches the network; a stale hit
//! serves the last known value and revalidates in the background; concurrent
//! reads for the same key collapse into a single in-flight request. A reader
//! whose leader is cancelled before settling clears the dead flight and takes
//! over as the new leader, so a dropped future never wedges a key.
//! Replacement happens under one write lock, so readers never observe a torn
//! value.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{Mutex, RwLock, watch};
use tokio::time::Instant;

use crate::error::QueryError;
use crate::key::{QueryKey, QueryOp};

/// Observable lifecycle state of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// Never fetched and nothing in flight.
    Empty,
    /// No value yet; first fetch in flight.
    Loading,
    /// Cached value inside its staleness window.
    Fresh,
    /// Cached value past its staleness window; still served.
    Stale,
}

#[derive(Clone)]
struct CacheEntry {
    value: Value,
    fetched_at: Instant,
    stale_after: Duration,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now.duration_since(self.fetched_at) < self.stale_after
    }
}

enum Lookup {
    Fresh(Value),
    Stale(Value),
    Miss,
}

type FlightResult = Option<Result<Value, QueryError>>;

/// The shared cache store. Cheap to clone; all clones see the same entries.
///
/// Only this layer ever mutates the store: read-through population,
/// invalidation after mutations, and gc on insert.
#[derive(Clone)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<QueryKey, CacheEntry>>>,
    inflight: Arc<Mutex<HashMap<QueryKey, watch::Receiver<FlightResult>>>>,
    max_entries: usize,
    gc_ttl: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(256, Duration::from_secs(1800))
    }
}

impl QueryCache {
    #[must_use]
    pub fn new(max_entries: usize, gc_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            inflight: Arc::new(Mutex::new(HashMap::new())),
            max_entries,
            gc_ttl,
        }
    }

    /// Read a key through the cache.
    ///
    /// Fresh hit: returns the cached value, no network. Stale hit: returns
    /// the stale value and spawns a background revalidation. Miss: joins or
    /// leads an in-flight fetch. Errors are never cached; the next read
    /// refetches.
    ///
    /// # Errors
    ///
    /// Returns the fetch error (shared by every collapsed reader) when there
    /// is no value to serve.
    pub async fn read_through<F, Fut>(
        &self,
        key: QueryKey,
        stale_after: Duration,
        fetch: F,
    ) -> Result<Value, QueryError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, QueryError>> + Send + 'static,
    {
        match self.lookup(&key).await {
            Lookup::Fresh(value) => Ok(value),
            Lookup::Stale(value) => {
                self.spawn_revalidate(key, stale_after, fetch);
                Ok(value)
            }
            Lookup::Miss => self.fetch_and_store(key, stale_after, fetch).await,
        }
    }

    /// Current lifecycle state of a key.
    pub async fn state(&self, key: &QueryKey) -> QueryState {
        let now = Instant::now();
        if let Some(entry) = self.entries.read().await.get(key) {
            return if entry.is_fresh(now) {
                QueryState::Fresh
            } else {
                QueryState::Stale
            };
        }
        if self.inflight.lock().await.contains_key(key) {
            QueryState::Loading
        } else {
            QueryState::Empty
        }
    }

    /// Drop one cached entry so the next read is forced to refetch.
    pub async fn invalidate(&self, key: &QueryKey) {
        self.entries.write().await.remove(key);
    }

    /// Drop every cached entry for one operation, regardless of parameters.
    pub async fn invalidate_op(&self, op: QueryOp) {
        self.entries.write().await.retain(|key, _| key.op != op);
    }

    /// Number of cached entries (expired ones included until gc).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn lookup(&self, key: &QueryKey) -> Lookup {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.get(key).map_or(Lookup::Miss, |entry| {
            if entry.is_fresh(now) {
                Lookup::Fresh(entry.value.clone())
            } else {
                Lookup::Stale(entry.value.clone())
            }
        })
    }

    fn spawn_revalidate<F, Fut>(&self, key: QueryKey, stale_after: Duration, fetch: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, QueryError>> + Send + 'static,
    {
        let cache = self.clone();
        tokio::spawn(async move {
            let op = key.op.as_str();
            if let Err(error) = cache.fetch_and_store(key, stale_after, fetch).await {
                tracing::warn!(%error, op, "background revalidation failed");
            }
        });
    }

    /// Single-flight fetch: the first caller for a key leads and performs the
    /// request; everyone else joins and receives the leader's result. A
    /// joiner whose leader dropped its sender without settling (the leading
    /// future was cancelled) clears the dead flight and retries as the new
    /// leader.
    async fn fetch_and_store<F, Fut>(
        &self,
        key: QueryKey,
        stale_after: Duration,
        fetch: F,
    ) -> Result<Value, QueryError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, QueryError>> + Send + 'static,
    {
        loop {
            let rx = {
                let mut inflight = self.inflight.lock().await;
                if let Some(rx) = inflight.get(&key).cloned() {
                    rx
                } else {
                    let (tx, rx) = watch::channel(None);
                    inflight.insert(key.clone(), rx);
                    drop(inflight);

                    let result = fetch().await;
                    if let Ok(value) = &result {
                        self.insert(key.clone(), value.clone(), stale_after).await;
                    }
                    let _ = tx.send(Some(result.clone()));
                    self.inflight.lock().await.remove(&key);
                    return result;
                }
            };

            if let Some(result) = settle(rx.clone()).await {
                return result;
            }

            // Leader gone without a result. Remove its entry unless a newer
            // flight already replaced it, then take over.
            let mut inflight = self.inflight.lock().await;
            if inflight
                .get(&key)
                .is_some_and(|current| current.same_channel(&rx))
            {
                inflight.remove(&key);
            }
        }
    }

    /// Store a fetched value, purging entries past the gc ttl and evicting
    /// overflow beyond `max_entries`.
    async fn insert(&self, key: QueryKey, value: Value, stale_after: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        entries.retain(|_, entry| now.duration_since(entry.fetched_at) < self.gc_ttl);
        entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
                stale_after,
            },
        );

        if entries.len() <= self.max_entries {
            return;
        }

        let mut overflow = entries.len() - self.max_entries;
        let keys = entries.keys().cloned().collect::<Vec<_>>();
        for k in keys {
            if overflow == 0 {
                break;
            }
            if entries.remove(&k).is_some() {
                overflow -= 1;
            }
        }
    }
}

/// Wait for an in-flight result. `None` means the leader dropped its sender
/// without ever settling.
async fn settle(mut rx: watch::Receiver<FlightResult>) -> FlightResult {
    loop {
        let settled = rx.borrow().clone();
        if settled.is_some() {
            return settled;
        }
        if rx.changed().await.is_err() {
            // Sender gone; one last look in case it settled just before.
            return rx.borrow().clone();
        }
    }
}
