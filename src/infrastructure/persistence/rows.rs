use chrono::{DateTime, Utc};

use crate::application::ports::RepositoryError;
use crate::domain::entities::{News, TaxonomyItem};
use crate::domain::value_objects::NewsStatus;

// Row mapping struct for the news list query
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NewsRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub topics_name: Option<String>,
    pub tags_name: Option<String>,
    pub status: i32,
}

impl NewsRow {
    pub fn into_domain(self) -> Result<News, RepositoryError> {
        let status = NewsStatus::try_from(self.status)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(News {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            title: self.title,
            content: self.content,
            topics_name: self.topics_name.unwrap_or_default(),
            tags_name: self.tags_name.unwrap_or_default(),
            status,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaxonomyRow {
    pub id: i64,
    pub name: String,
}

impl From<TaxonomyRow> for TaxonomyItem {
    fn from(row: TaxonomyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
