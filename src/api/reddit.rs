use super::{
    HttpTransport,
    reddit_dto::RedditListingDto,
    utils::{make_request, parse_response_object},
};
use crate::{error::FetchError, models::NewsItem};

pub const DEFAULT_COMMUNITY: &str = "TeslaMotors";

pub fn community_feed_url(community: &str) -> String {
    format!("https://www.reddit.com/r/{}/new.json", community)
}

pub async fn get_latest_posts(
    limit: usize,
    transport: &dyn HttpTransport,
    feed_url: &str,
    user_agent: &str,
) -> Result<RedditListingDto, FetchError> {
    let query = [("limit", limit.to_string()), ("raw_json", "1".to_string())];
    let headers = [("User-Agent", user_agent), ("Accept", "application/json")];
    let res = make_request(transport, feed_url, &query, &headers).await?;

    parse_response_object::<RedditListingDto>(res, "Unexpected payload structure from news API")
}

pub async fn get_news(
    limit: usize,
    transport: &dyn HttpTransport,
    feed_url: &str,
    user_agent: &str,
    default_community: &str,
) -> Result<Vec<NewsItem>, FetchError> {
    get_latest_posts(limit, transport, feed_url, user_agent)
        .await?
        .to_news_items(default_community)
}
