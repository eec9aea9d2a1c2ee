use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{News, TaxonomyItem};

/// Body of every JSON response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// DTO for news responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub topics_name: String,
    pub tags_name: String,
    pub status: i32,
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            created_at: news.created_at,
            updated_at: news.updated_at,
            title: news.title,
            content: news.content,
            topics_name: news.topics_name,
            tags_name: news.tags_name,
            status: news.status.as_i32(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 512, message = "title must be 1-512 characters"))]
    pub title: String,
    pub content: String,
    /// 1 draft, 2 published, 3 deleted
    #[validate(range(min = 1, max = 3, message = "status must be 1, 2 or 3"))]
    pub status: i32,
}

/// Replacement values for `PUT /news/{news_id}`; the id comes from the path
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 512, message = "title must be 1-512 characters"))]
    pub title: String,
    pub content: String,
    #[validate(range(min = 1, max = 3, message = "status must be 1, 2 or 3"))]
    pub status: i32,
}

/// DTO for topic and tag responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaxonomyDto {
    pub id: i64,
    pub name: String,
}

impl From<TaxonomyItem> for TaxonomyDto {
    fn from(item: TaxonomyItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaxonomyCreateRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaxonomyUpdateRequest {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewsTopicsAssocRequest {
    #[validate(range(min = 1, message = "news_id must be positive"))]
    pub news_id: i64,
    #[validate(length(min = 1, message = "at least one topic id is required"))]
    pub news_topic_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewsTagsAssocRequest {
    #[validate(range(min = 1, message = "news_id must be positive"))]
    pub news_id: i64,
    #[validate(length(min = 1, message = "at least one tag id is required"))]
    pub news_tag_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InsertedIds {
    pub inserted_id: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdatedIds {
    pub updated_id: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedIds {
    pub deleted_id: Vec<i64>,
}
