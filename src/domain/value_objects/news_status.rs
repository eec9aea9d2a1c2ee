use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Publication state of a news article, stored as an INTEGER column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum NewsStatus {
    Draft,
    Published,
    Deleted,
}

impl NewsStatus {
    pub fn as_i32(&self) -> i32 {
        match self {
            NewsStatus::Draft => 1,
            NewsStatus::Published => 2,
            NewsStatus::Deleted => 3,
        }
    }
}

impl TryFrom<i32> for NewsStatus {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NewsStatus::Draft),
            2 => Ok(NewsStatus::Published),
            3 => Ok(NewsStatus::Deleted),
            other => Err(DomainError::InvalidStatus(other)),
        }
    }
}

impl From<NewsStatus> for i32 {
    fn from(status: NewsStatus) -> Self {
        status.as_i32()
    }
}

impl std::fmt::Display for NewsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsStatus::Draft => write!(f, "DRAFT"),
            NewsStatus::Published => write!(f, "PUBLISHED"),
            NewsStatus::Deleted => write!(f, "DELETED"),
        }
    }
}
