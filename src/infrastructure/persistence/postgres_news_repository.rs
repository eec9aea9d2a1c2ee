use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::entity_store::EntityStore;
use super::executor::{PgExecutor, SqlExecutor};
use super::query_builder::{Comparator, Connector, ParamExpr, Statement};
use super::tables::NEWS_TABLE;
use crate::application::ports::{NewsRepository, RepositoryError};
use crate::domain::entities::{News, NewsDraft, NewsUpdate};
use crate::domain::value_objects::{NewsFilter, Pagination};

pub struct PostgresNewsRepository {
    store: EntityStore,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_executor(Arc::new(PgExecutor::new(pool)))
    }

    pub fn with_executor(executor: Arc<dyn SqlExecutor>) -> Self {
        Self {
            store: EntityStore::new(&NEWS_TABLE, executor),
        }
    }
}

/// Joined news query. Filters are checked in the order id, status, topics,
/// title, which fixes the placeholder numbering; the page window comes last.
pub fn news_list_statement(pagination: &Pagination, filter: Option<&NewsFilter>) -> Statement {
    let mut builder = NEWS_TABLE.list_builder();

    if let Some(filter) = filter {
        if filter.news_id != 0 {
            builder.add_filter(Connector::And, "news.id", Comparator::Equal, filter.news_id);
        }
        if filter.status != 0 {
            builder.add_filter(Connector::And, "news.status", Comparator::Equal, filter.status);
        }
        if !filter.topics.is_empty() {
            builder.add_custom_filter(
                Connector::And,
                "topics.id",
                Comparator::Equal,
                ParamExpr::Any,
                filter.topics.clone(),
            );
        }
        if !filter.title.is_empty() {
            builder.add_filter(
                Connector::And,
                "news.title",
                Comparator::Like,
                format!("%{}%", filter.title),
            );
        }
    }

    NEWS_TABLE.finish_list(builder, Some(pagination)).build()
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn create_bulk(&self, news: &[NewsDraft]) -> Result<Vec<i64>, RepositoryError> {
        self.store.insert(news).await
    }

    async fn list(
        &self,
        pagination: Pagination,
        filter: Option<NewsFilter>,
    ) -> Result<Vec<News>, RepositoryError> {
        let statement = news_list_statement(&pagination, filter.as_ref());
        let rows = self.store.executor().fetch_news(&statement).await?;

        rows.into_iter().map(|row| row.into_domain()).collect()
    }

    async fn update_bulk(&self, news: &[NewsUpdate]) -> Result<Vec<i64>, RepositoryError> {
        self.store.update(news).await
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
    use crate::infrastructure::persistence::rows::NewsRow;
    use chrono::Utc;

    #[test]
    fn test_list_statement_with_status_and_topics() {
        let filter = NewsFilter {
            status: 1,
            topics: vec![1, 2, 3],
            ..NewsFilter::default()
        };

        let statement = news_list_statement(&Pagination::new(0, 2), Some(&filter));

        assert!(statement
            .sql
            .contains(" WHERE news.status = $1 AND topics.id = ANY($2) GROUP BY news.id"));
        assert!(statement.sql.ends_with(" LIMIT $3 OFFSET $4"));
        assert_eq!(statement.sql.matches("WHERE").count(), 1);
        assert_eq!(
            statement.params,
            vec![
                SqlParam::Int(1),
                SqlParam::BigIntArray(vec![1, 2, 3]),
                SqlParam::BigInt(2),
                SqlParam::BigInt(0),
            ]
        );
    }

    #[test]
    fn test_list_statement_with_every_filter() {
        let filter = NewsFilter {
            status: 2,
            topics: vec![4],
            news_id: 9,
            title: "rate".to_string(),
        };

        let statement = news_list_statement(&Pagination::new(10, 5), Some(&filter));

        assert!(statement.sql.contains(
            " WHERE news.id = $1 AND news.status = $2 AND topics.id = ANY($3) AND news.title LIKE $4"
        ));
        assert!(statement.sql.ends_with(" LIMIT $5 OFFSET $6"));
        assert_eq!(statement.params[0], SqlParam::BigInt(9));
        assert_eq!(statement.params[3], SqlParam::Text("%rate%".to_string()));
    }

    #[test]
    fn test_list_statement_without_filter() {
        let statement = news_list_statement(&Pagination::first(), None);

        assert!(!statement.sql.contains("WHERE"));
        assert!(statement
            .sql
            .ends_with(" GROUP BY news.id ORDER BY news.id LIMIT $1 OFFSET $2"));
        assert_eq!(
            statement.params,
            vec![SqlParam::BigInt(1), SqlParam::BigInt(0)]
        );
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor.expect_fetch_news().times(1).returning(|_| {
            let now = Utc::now();
            Ok(vec![NewsRow {
                id: 3,
                created_at: now,
                updated_at: now,
                title: "Rates".into(),
                content: "Up".into(),
                topics_name: Some("economy".into()),
                tags_name: None,
                status: 1,
            }])
        });
        let repo = PostgresNewsRepository::with_executor(Arc::new(executor));

        // Act
        let news = repo
            .list(Pagination::first(), Some(NewsFilter::by_id(3)))
            .await
            .unwrap();

        // Assert
        assert_eq!(news.len(), 1);
        assert_eq!(news[0].id, 3);
        assert_eq!(news[0].topics_name, "economy");
        assert_eq!(news[0].tags_name, "");
    }

    #[tokio::test]
    async fn test_update_returns_matched_ids() {
        // Arrange
        let mut executor = MockSqlExecutor::new();
        executor
            .expect_fetch_ids()
            .withf(|s| s.operation == "news.bulk_update" && s.params.len() == 8)
            .returning(|_| Ok(vec![1]));
        let repo = PostgresNewsRepository::with_executor(Arc::new(executor));
        let draft = NewsDraft::new("T".into(), "C".into(), 1).unwrap();
        let updates = vec![
            NewsUpdate::new(1, draft.clone()).unwrap(),
            NewsUpdate::new(77, draft).unwrap(),
        ];

        // Act
        let ids = repo.update_bulk(&updates).await.unwrap();

        // Assert
        assert_eq!(ids, vec![1]);
    }
}
