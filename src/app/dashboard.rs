use std::sync::Arc;

use derive_getters::Getters;
use log::error;

use crate::{
    models::{NewsItem, Quote},
    services::{NewsFetcher, QuoteFetcher},
};

pub const QUOTE_ERROR: &str = "Failed to load stock price. Please try again shortly.";
pub const QUOTE_WARNING: &str = "Live price temporarily unavailable; showing cached data.";
pub const NEWS_ERROR: &str = "Failed to load news. Please try again shortly.";

#[derive(Clone, Debug, Default, Getters)]
pub struct DashboardView {
    quote: Option<Quote>,
    quote_warning: Option<String>,
    quote_error: Option<String>,
    news_items: Vec<NewsItem>,
    news_error: Option<String>,
}

#[derive(Clone)]
pub struct Dashboard {
    quotes: Arc<QuoteFetcher>,
    news: Arc<NewsFetcher>,
    symbol: String,
    news_limit: i64,
}

impl Dashboard {
    pub fn new(
        quotes: Arc<QuoteFetcher>,
        news: Arc<NewsFetcher>,
        symbol: String,
        news_limit: i64,
    ) -> Self {
        Self {
            quotes,
            news,
            symbol,
            news_limit,
        }
    }

    /// Runs both fetches concurrently; a failure in one never hides the other.
    pub async fn load(&self) -> DashboardView {
        let quotes = Arc::clone(&self.quotes);
        let symbol = self.symbol.clone();
        let quote_task = tokio::spawn(async move { quotes.fetch_quote(&symbol).await });

        let news = Arc::clone(&self.news);
        let limit = self.news_limit;
        let news_task = tokio::spawn(async move { news.fetch_news(limit).await });

        let (quote_result, news_result) = tokio::join!(quote_task, news_task);

        let mut view = DashboardView::default();

        match quote_result {
            Ok(quote) => {
                if *quote.is_fallback() {
                    view.quote_warning = Some(QUOTE_WARNING.to_string());
                }
                view.quote = Some(quote);
            }
            Err(err) => {
                error!("Quote task for {} failed: {}", self.symbol, err);
                view.quote_error = Some(QUOTE_ERROR.to_string());
            }
        }

        match news_result {
            Ok(Ok(items)) => view.news_items = items,
            Ok(Err(err)) => {
                error!("Failed to load news: {}", err);
                view.news_error = Some(NEWS_ERROR.to_string());
            }
            Err(err) => {
                error!("News task failed: {}", err);
                view.news_error = Some(NEWS_ERROR.to_string());
            }
        }

        view
    }
}
