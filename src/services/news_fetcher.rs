use std::sync::Arc;

use log::{debug, info, warn};

use super::NewsCache;
use crate::{
    api::{HttpTransport, reddit},
    config::NewsConfig,
    error::FetchError,
    models::NewsItem,
};

pub const DEFAULT_NEWS_LIMIT: i64 = 5;
pub const MIN_NEWS_LIMIT: i64 = 1;
pub const MAX_NEWS_LIMIT: i64 = 20;

pub fn clamp_limit(limit: i64) -> usize {
    limit.clamp(MIN_NEWS_LIMIT, MAX_NEWS_LIMIT) as usize
}

fn take(items: &[NewsItem], limit: usize) -> Vec<NewsItem> {
    items.iter().take(limit).cloned().collect()
}

pub struct NewsFetcher {
    transport: Arc<dyn HttpTransport>,
    cache: Arc<NewsCache>,
    config: NewsConfig,
}

impl NewsFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, cache: Arc<NewsCache>, config: NewsConfig) -> Self {
        Self {
            transport,
            cache,
            config,
        }
    }

    pub fn cache(&self) -> &Arc<NewsCache> {
        &self.cache
    }

    /// Returns up to `limit` recent posts, served from the cache while it is fresh.
    ///
    /// When a refresh fails, stale cached items are returned if any exist;
    /// otherwise the failure is returned to the caller.
    pub async fn fetch_news(&self, limit: i64) -> Result<Vec<NewsItem>, FetchError> {
        let limit = clamp_limit(limit);
        let seen_attempts = self.cache.attempts();

        if let Some(items) = self.cache.fresh() {
            debug!("News cache hit ({} items)", items.len());
            return Ok(take(&items, limit));
        }

        let mut last_error = self.cache.lock_refresh().await;

        // Another caller may have refreshed while we waited for the lock.
        if let Some(items) = self.cache.fresh() {
            debug!("News cache refreshed by concurrent caller");
            return Ok(take(&items, limit));
        }

        // A concurrent refresh finished while we waited; reuse its outcome.
        if self.cache.attempts() != seen_attempts {
            if let Some(stale) = self.cache.any() {
                debug!("Serving {} stale items after concurrent refresh", stale.len());
                return Ok(take(&stale, limit));
            }
            if let Some(err) = last_error.as_ref() {
                return Err(err.clone());
            }
        }

        let fetched = reddit::get_news(
            limit,
            self.transport.as_ref(),
            &self.config.feed_url,
            &self.config.user_agent,
            &self.config.community,
        )
        .await;

        match fetched {
            Ok(items) => {
                info!("Fetched {} news items from {}", items.len(), self.config.feed_url);
                let items = self.cache.store(items);
                self.cache.finish_attempt(&mut last_error, None);
                Ok(take(&items, limit))
            }
            Err(err) => {
                self.cache.finish_attempt(&mut last_error, Some(err.clone()));
                match self.cache.any() {
                    Some(stale) => {
                        warn!("News refresh failed, serving {} stale items: {}", stale.len(), err);
                        Ok(take(&stale, limit))
                    }
                    None => Err(err),
                }
            }
        }
    }

    pub async fn fetch_default_news(&self) -> Result<Vec<NewsItem>, FetchError> {
        self.fetch_news(DEFAULT_NEWS_LIMIT).await
    }
}
