use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{News, NewsDraft, NewsUpdate};
use crate::domain::value_objects::{NewsFilter, Pagination};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Query {operation} failed: {source}")]
    Query {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Association mismatch in {operation}: expected {expected} rows, {affected} affected")]
    AssociationMismatch {
        operation: String,
        expected: u64,
        affected: u64,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for news persistence. Bulk writes return the ids the database
/// reported; a shorter list than the input means some rows did not match.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Insert all drafts in one statement
    async fn create_bulk(&self, news: &[NewsDraft]) -> Result<Vec<i64>, RepositoryError>;

    /// List news with their aggregated topic and tag names
    async fn list(
        &self,
        pagination: Pagination,
        filter: Option<NewsFilter>,
    ) -> Result<Vec<News>, RepositoryError>;

    async fn update_bulk(&self, news: &[NewsUpdate]) -> Result<Vec<i64>, RepositoryError>;

    async fn delete_bulk(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError>;
}
