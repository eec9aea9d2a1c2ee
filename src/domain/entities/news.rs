use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, value_objects::NewsStatus};

/// News article as read back from storage, with its topic and tag names
/// aggregated into comma-separated strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub topics_name: String,
    pub tags_name: String,
    pub status: NewsStatus,
}

/// Validated input for creating a news article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    title: String,
    content: String,
    status: NewsStatus,
}

impl NewsDraft {
    pub fn new(title: String, content: String, status: i32) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        Ok(Self {
            title,
            content,
            status: NewsStatus::try_from(status)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> NewsStatus {
        self.status
    }
}

/// Validated replacement values for an existing news article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsUpdate {
    id: i64,
    draft: NewsDraft,
}

impl NewsUpdate {
    pub fn new(id: i64, draft: NewsDraft) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::InvalidId(id));
        }
        Ok(Self { id, draft })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn draft(&self) -> &NewsDraft {
        &self.draft
    }
}
