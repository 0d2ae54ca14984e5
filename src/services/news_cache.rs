use std::{
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::{Mutex, MutexGuard},
    time::Instant,
};

use crate::{error::FetchError, models::NewsItem};

pub const CACHE_TTL: Duration = Duration::from_secs(120);

#[derive(Clone, Debug)]
struct CacheEntry {
    items: Arc<Vec<NewsItem>>,
    stored_at: Instant,
}

/// Process-wide cache holding the most recent news fetch.
///
/// At most one entry exists; `store` replaces it wholesale. Refreshes are
/// serialised through `lock_refresh` so only one upstream request is in
/// flight at a time. The refresh lock holds the error of the last attempt,
/// if it failed, so callers that waited on it can reuse the outcome.
#[derive(Debug)]
pub struct NewsCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
    refresh: Mutex<Option<FetchError>>,
    attempts: AtomicU64,
}

impl Default for NewsCache {
    fn default() -> Self {
        Self::new(CACHE_TTL)
    }
}

impl NewsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
            refresh: Mutex::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Items stored no longer than `ttl` ago.
    pub fn fresh(&self) -> Option<Arc<Vec<NewsItem>>> {
        let entry = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        entry
            .as_ref()
            .filter(|e| e.stored_at.elapsed() <= self.ttl)
            .map(|e| Arc::clone(&e.items))
    }

    /// Whatever is stored, regardless of age.
    pub fn any(&self) -> Option<Arc<Vec<NewsItem>>> {
        let entry = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        entry.as_ref().map(|e| Arc::clone(&e.items))
    }

    pub fn store(&self, items: Vec<NewsItem>) -> Arc<Vec<NewsItem>> {
        let items = Arc::new(items);
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = Some(CacheEntry {
            items: Arc::clone(&items),
            stored_at: Instant::now(),
        });
        items
    }

    pub fn reset(&self) {
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = None;
    }

    /// Number of completed refresh attempts, successful or not.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Acquire)
    }

    pub async fn lock_refresh(&self) -> MutexGuard<'_, Option<FetchError>> {
        self.refresh.lock().await
    }

    /// Records the outcome of a refresh while the refresh lock is held.
    pub fn finish_attempt(&self, last_error: &mut Option<FetchError>, error: Option<FetchError>) {
        *last_error = error;
        self.attempts.fetch_add(1, Ordering::Release);
    }
}
