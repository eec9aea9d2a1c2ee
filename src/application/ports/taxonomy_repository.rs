use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{TaxonomyDraft, TaxonomyItem, TaxonomyUpdate};
use crate::domain::value_objects::{Pagination, TaxonomyFilter};
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Port for the topic and tag tables
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn create_bulk(&self, items: &[TaxonomyDraft]) -> Result<Vec<i64>, RepositoryError>;

    /// Pagination is optional here; without it every matching row is returned
    async fn list(
        &self,
        pagination: Option<Pagination>,
        filter: Option<TaxonomyFilter>,
    ) -> Result<Vec<TaxonomyItem>, RepositoryError>;

    async fn update_bulk(&self, items: &[TaxonomyUpdate]) -> Result<Vec<i64>, RepositoryError>;

    async fn delete_bulk(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError>;
}
