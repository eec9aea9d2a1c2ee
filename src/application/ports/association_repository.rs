use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::Association;
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Port for one news-to-taxonomy join table
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// Insert every `(parent, child)` row. Fails when the database reports
    /// fewer affected rows than were sent.
    async fn create_assoc(&self, associations: &[Association]) -> Result<(), RepositoryError>;

    /// Remove all rows referencing the given parents, returning how many went
    async fn clean_assoc(&self, parent_ids: &[i64]) -> Result<u64, RepositoryError>;
}
