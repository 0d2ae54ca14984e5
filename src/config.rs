use std::{net::SocketAddr, time::Duration};

use clap::Parser;

use crate::{
    api::{
        USER_AGENT,
        transport::DEFAULT_TIMEOUT,
        reddit::{DEFAULT_COMMUNITY, community_feed_url},
        yahoo::QUOTE_URL,
    },
    services::news_fetcher::DEFAULT_NEWS_LIMIT,
};

#[derive(Clone, Debug)]
pub struct QuoteConfig {
    pub quote_url: String,
    pub user_agent: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            quote_url: QUOTE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewsConfig {
    pub feed_url: String,
    pub user_agent: String,
    /// Used as the post source when an entry carries no subreddit.
    pub community: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feed_url: community_feed_url(DEFAULT_COMMUNITY),
            user_agent: USER_AGENT.to_string(),
            community: DEFAULT_COMMUNITY.to_string(),
        }
    }
}

/// Command line / environment settings. A `.env` file is read before parsing.
#[derive(Clone, Debug, Parser)]
#[command(name = "ticker-dashboard", about = "Stock quote and news dashboard")]
pub struct Settings {
    /// Address the HTTP server listens on
    #[arg(long, env = "DASHBOARD_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Ticker symbol shown on the dashboard
    #[arg(long, env = "DASHBOARD_SYMBOL", default_value = "TSLA")]
    pub symbol: String,

    #[arg(long, env = "DASHBOARD_NEWS_LIMIT", default_value_t = DEFAULT_NEWS_LIMIT)]
    pub news_limit: i64,

    /// Community whose newest posts make up the news feed
    #[arg(long, env = "DASHBOARD_COMMUNITY", default_value = DEFAULT_COMMUNITY)]
    pub community: String,

    #[arg(long, env = "DASHBOARD_CACHE_TTL_SECS", default_value_t = 120)]
    pub cache_ttl_secs: u64,

    #[arg(long, env = "DASHBOARD_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    #[arg(long, env = "DASHBOARD_QUOTE_URL", default_value = QUOTE_URL)]
    pub quote_url: String,

    /// Defaults to the community's `new.json` listing
    #[arg(long, env = "DASHBOARD_NEWS_URL")]
    pub news_url: Option<String>,

    #[arg(long, env = "DASHBOARD_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,
}

impl Settings {
    pub fn quote_config(&self) -> QuoteConfig {
        QuoteConfig {
            quote_url: self.quote_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn news_config(&self) -> NewsConfig {
        NewsConfig {
            feed_url: self
                .news_url
                .clone()
                .unwrap_or_else(|| community_feed_url(&self.community)),
            user_agent: self.user_agent.clone(),
            community: self.community.clone(),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
