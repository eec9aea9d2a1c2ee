pub mod assoc;
pub mod health;
pub mod news;
pub mod tags;
pub mod taxonomy;
pub mod topics;

use axum::http::Uri;
use serde::Deserialize;

pub use assoc::{assign_tags_handler, assign_topics_handler};
pub use health::{health_handler, readiness_handler};
pub use news::{
    create_news_handler, delete_news_handler, get_news_handler, list_news_handler,
    update_news_handler,
};
pub use tags::{create_tags_handler, delete_tags_handler, list_tags_handler, update_tags_handler};
pub use topics::{
    create_topics_handler, delete_topics_handler, list_topics_handler, update_topics_handler,
};

/// `pagination` and `filter` tokens accepted by the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub pagination: Option<String>,
    pub filter: Option<String>,
}

/// Cache key for a request: its path plus the raw query string
pub fn cache_key(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
