use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use super::utils::parse_epoch_seconds;
use crate::{error::FetchError, models::NewsItem};

#[derive(Debug, Deserialize, Getters, new)]
pub struct RedditListingDto {
    data: RedditListingDataDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct RedditListingDataDto {
    children: Vec<RedditChildDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct RedditChildDto {
    #[serde(default)]
    data: Option<RedditPostDto>,
}

#[derive(Debug, Default, Deserialize, Getters, new)]
pub struct RedditPostDto {
    title: Option<String>,
    url: Option<String>,
    created_utc: Option<f64>,
    subreddit: Option<String>,
}

impl RedditPostDto {
    /// Returns `None` for posts missing a title, url or creation time.
    pub fn to_news_item(&self, default_community: &str) -> Result<Option<NewsItem>, FetchError> {
        let (Some(title), Some(url), Some(created)) = (&self.title, &self.url, self.created_utc)
        else {
            return Ok(None);
        };
        if title.is_empty() || url.is_empty() {
            return Ok(None);
        }

        let community = self.subreddit.as_deref().unwrap_or(default_community);

        Ok(Some(NewsItem::new(
            title.clone(),
            url.clone(),
            format!("r/{}", community),
            parse_epoch_seconds(created, "created_utc")?,
        )))
    }
}

impl RedditListingDto {
    pub fn to_news_items(&self, default_community: &str) -> Result<Vec<NewsItem>, FetchError> {
        let mut items = Vec::with_capacity(self.data.children.len());
        for child in &self.data.children {
            let Some(post) = child.data() else {
                continue;
            };
            if let Some(item) = post.to_news_item(default_community)? {
                items.push(item);
            }
        }
        Ok(items)
    }
}
