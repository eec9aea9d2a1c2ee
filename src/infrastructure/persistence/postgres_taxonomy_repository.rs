use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::entity_store::EntityStore;
use super::executor::{PgExecutor, SqlExecutor};
use super::query_builder::{Comparator, Connector, Statement};
use super::tables::{TableSpec, TAGS_TABLE, TOPICS_TABLE};
use crate::application::ports::{RepositoryError, TaxonomyRepository};
use crate::domain::entities::{TaxonomyDraft, TaxonomyItem, TaxonomyUpdate};
use crate::domain::value_objects::{Pagination, TaxonomyFilter};

/// Repository over one `(id, name)` table: topics or tags
pub struct PostgresTaxonomyRepository {
    store: EntityStore,
}

impl PostgresTaxonomyRepository {
    pub fn topics(pool: PgPool) -> Self {
        Self::with_executor(&TOPICS_TABLE, Arc::new(PgExecutor::new(pool)))
    }

    pub fn tags(pool: PgPool) -> Self {
        Self::with_executor(&TAGS_TABLE, Arc::new(PgExecutor::new(pool)))
    }

    pub fn with_executor(table: &'static TableSpec, executor: Arc<dyn SqlExecutor>) -> Self {
        Self {
            store: EntityStore::new(table, executor),
        }
    }
}

pub fn taxonomy_list_statement(
    table: &TableSpec,
    pagination: Option<&Pagination>,
    filter: Option<&TaxonomyFilter>,
) -> Statement {
    let mut builder = table.list_builder();

    if let Some(filter) = filter {
        if filter.id != 0 {
            builder.add_filter(Connector::And, "id", Comparator::Equal, filter.id);
        }
        if !filter.name.is_empty() {
            builder.add_filter(
                Connector::And,
                "name",
                Comparator::Like,
                format!("%{}%", filter.name),
            );
        }
    }

    table.finish_list(builder, pagination).build()
}

#[async_trait]
impl TaxonomyRepository for PostgresTaxonomyRepository {
    async fn create_bulk(&self, items: &[TaxonomyDraft]) -> Result<Vec<i64>, RepositoryError> {
        self.store.insert(items).await
    }

    async fn list(
        &self,
        pagination: Option<Pagination>,
        filter: Option<TaxonomyFilter>,
    ) -> Result<Vec<TaxonomyItem>, RepositoryError> {
        let statement =
            taxonomy_list_statement(self.store.table(), pagination.as_ref(), filter.as_ref());
        let rows = self.store.executor().fetch_taxonomy(&statement).await?;

        Ok(rows.into_iter().map(TaxonomyItem::from).collect())
    }

    async fn update_bulk(&self, items: &[TaxonomyUpdate]) -> Result<Vec<i64>, RepositoryError> {
        self.store.update(items).await
    }

    async fn delete_bulk(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError> {
        self.store.delete(ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::executor::MockSqlExecutor;
    use crate::infrastructure::persistence::query_builder::SqlParam;
    use crate::infrastructure::persistence::rows::TaxonomyRow;

    #[test]
    fn test_list_statement_without_pagination() {
        let filter = TaxonomyFilter {
            id: 0,
            name: "eco".to_string(),
        };

        let statement = taxonomy_list_statement(&TOPICS_TABLE, None, Some(&filter));

        assert_eq!(
            statement.sql,
            "SELECT id, name FROM news_topics WHERE name LIKE $1 ORDER BY id"
        );
        assert_eq!(statement.params, vec![SqlParam::Text("%eco%".to_string())]);
    }

    #[test]
    fn test_list_statement_with_id_and_pagination() {
        let filter = TaxonomyFilter {
            id: 5,
            name: "x".to_string(),
        };

        let statement =
            taxonomy_list_statement(&TAGS_TABLE, Some(&Pagination::new(4, 2)), Some(&filter));

        assert_eq!(
            statement.sql,
            "SELECT id, name FROM news_tags WHERE id = $1 AND name LIKE $2 ORDER BY id LIMIT $3 OFFSET $4"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlParam::BigInt(5),
                SqlParam::Text("%x%".to_string()),
                SqlParam::BigInt(2),
                SqlParam::BigInt(4),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_partial_is_not_an_error() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor
            .expect_fetch_ids()
            .withf(|s| s.sql == "DELETE FROM news_tags WHERE id = ANY($1) RETURNING id")
            .returning(|_| Ok(vec![1, 2]));
        let repo = PostgresTaxonomyRepository::with_executor(&TAGS_TABLE, Arc::new(executor));

        // Act
        let deleted = repo.delete_bulk(&[1, 2, 3, 4]).await;

        // Assert
        assert_eq!(deleted.unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor.expect_fetch_taxonomy().returning(|_| {
            Ok(vec![
                TaxonomyRow {
                    id: 1,
                    name: "economy".into(),
                },
                TaxonomyRow {
                    id: 2,
                    name: "politics".into(),
                },
            ])
        });
        let repo = PostgresTaxonomyRepository::with_executor(&TOPICS_TABLE, Arc::new(executor));

        // Act
        let items = repo.list(None, None).await.unwrap();

        // Assert
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "politics");
    }
}
