pub mod news_cache;
pub mod news_fetcher;
pub mod quote_fetcher;

pub use news_cache::NewsCache;
pub use news_fetcher::NewsFetcher;
pub use quote_fetcher::QuoteFetcher;
