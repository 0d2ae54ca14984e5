pub mod news_item;
pub mod quote;

pub use news_item::NewsItem;
pub use quote::Quote;
