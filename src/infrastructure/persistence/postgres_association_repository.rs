use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::bulk::{assoc_delete, assoc_insert};
use super::executor::{PgExecutor, SqlExecutor};
use super::tables::{AssocRow, AssocSpec, NEWS_TAGS_ASSOC, NEWS_TOPICS_ASSOC};
use crate::application::ports::{AssociationRepository, RepositoryError};
use crate::domain::entities::Association;

/// Join rows between news and one taxonomy table
pub struct PostgresAssociationRepository {
    spec: &'static AssocSpec,
    executor: Arc<dyn SqlExecutor>,
}

impl PostgresAssociationRepository {
    pub fn news_topics(pool: PgPool) -> Self {
        Self::with_executor(&NEWS_TOPICS_ASSOC, Arc::new(PgExecutor::new(pool)))
    }

    pub fn news_tags(pool: PgPool) -> Self {
        Self::with_executor(&NEWS_TAGS_ASSOC, Arc::new(PgExecutor::new(pool)))
    }

    pub fn with_executor(spec: &'static AssocSpec, executor: Arc<dyn SqlExecutor>) -> Self {
        Self { spec, executor }
    }
}

fn flatten(associations: &[Association]) -> Vec<AssocRow> {
    associations
        .iter()
        .flat_map(|assoc| {
            assoc.child_ids.iter().map(move |&child_id| AssocRow {
                parent_id: assoc.parent_id,
                child_id,
            })
        })
        .collect()
}

#[async_trait]
impl AssociationRepository for PostgresAssociationRepository {
    async fn create_assoc(&self, associations: &[Association]) -> Result<(), RepositoryError> {
        let rows = flatten(associations);
        let Some(statement) = assoc_insert(self.spec, &rows) else {
            return Ok(());
        };

        let affected = self.executor.execute(&statement).await?;
        let expected = rows.len() as u64;
        if affected != expected {
            tracing::warn!(
                operation = %statement.operation,
                expected,
                affected,
                "association row count mismatch"
            );
            return Err(RepositoryError::AssociationMismatch {
                operation: statement.operation,
                expected,
                affected,
            });
        }

        Ok(())
    }

    async fn clean_assoc(&self, parent_ids: &[i64]) -> Result<u64, RepositoryError> {
        match assoc_delete(self.spec, parent_ids) {
            Some(statement) => self.executor.execute(&statement).await,
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::executor::MockSqlExecutor;
    use crate::infrastructure::persistence::query_builder::SqlParam;

    #[test]
    fn test_flatten_pairs() {
        let rows = flatten(&[
            Association::new(1, vec![10, 11]),
            Association::new(2, vec![12]),
        ]);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[2],
            AssocRow {
                parent_id: 2,
                child_id: 12
            }
        );
    }

    #[tokio::test]
    async fn test_create_assoc_success() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor
            .expect_execute()
            .withf(|s| {
                s.params
                    == vec![
                        SqlParam::BigInt(1),
                        SqlParam::BigInt(10),
                        SqlParam::BigInt(1),
                        SqlParam::BigInt(11),
                    ]
            })
            .times(1)
            .returning(|_| Ok(2));
        let repo = PostgresAssociationRepository::with_executor(&NEWS_TOPICS_ASSOC, Arc::new(executor));

        // Act
        let result = repo
            .create_assoc(&[Association::new(1, vec![10, 11])])
            .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_assoc_count_mismatch() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor.expect_execute().returning(|_| Ok(1));
        let repo = PostgresAssociationRepository::with_executor(&NEWS_TAGS_ASSOC, Arc::new(executor));

        // Act
        let result = repo
            .create_assoc(&[Association::new(1, vec![10, 11])])
            .await;

        // Assert
        match result {
            Err(RepositoryError::AssociationMismatch {
                operation,
                expected,
                affected,
            }) => {
                assert_eq!(operation, "news_tags_assoc.insert");
                assert_eq!(expected, 2);
                assert_eq!(affected, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_assoc_is_noop() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor.expect_execute().times(0);
        let repo = PostgresAssociationRepository::with_executor(&NEWS_TAGS_ASSOC, Arc::new(executor));

        // Act & Assert
        assert!(repo.create_assoc(&[Association::new(1, vec![])]).await.is_ok());
        assert_eq!(repo.clean_assoc(&[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clean_assoc_returns_affected_rows() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor
            .expect_execute()
            .withf(|s| s.sql == "DELETE FROM assoc_news_topics WHERE news_id = ANY($1)")
            .returning(|_| Ok(3));
        let repo = PostgresAssociationRepository::with_executor(&NEWS_TOPICS_ASSOC, Arc::new(executor));

        // Act
        let removed = repo.clean_assoc(&[5]).await.unwrap();

        // Assert
        assert_eq!(removed, 3);
    }
}
