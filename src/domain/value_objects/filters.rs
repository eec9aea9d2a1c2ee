use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Optional predicates for listing news. Zero or empty fields are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewsFilter {
    pub status: i32,
    pub topics: Vec<i64>,
    pub news_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl NewsFilter {
    pub fn by_id(news_id: i64) -> Self {
        Self {
            news_id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TopicFilter {
    pub name: String,
    pub news_topic_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TagFilter {
    pub name: String,
    pub news_tag_id: i64,
}

/// Filter shared by the topic and tag tables, both of which are `(id, name)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyFilter {
    pub id: i64,
    pub name: String,
}

impl From<TopicFilter> for TaxonomyFilter {
    fn from(filter: TopicFilter) -> Self {
        Self {
            id: filter.news_topic_id,
            name: filter.name,
        }
    }
}

impl From<TagFilter> for TaxonomyFilter {
    fn from(filter: TagFilter) -> Self {
        Self {
            id: filter.news_tag_id,
            name: filter.name,
        }
    }
}
