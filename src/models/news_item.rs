use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct NewsItem {
    title: String,
    url: String,
    source: String,
    published_at: DateTime<Utc>,
}
