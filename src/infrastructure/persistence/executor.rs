use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, PgPool};

use super::query_builder::{SqlParam, Statement};
use super::rows::{NewsRow, TaxonomyRow};
use crate::application::ports::RepositoryError;
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Runs finished statements. Every method fails as a whole: a query or row
/// decoding error discards the rows read so far.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Run a statement whose result set is a single `id` column
    async fn fetch_ids(&self, statement: &Statement) -> Result<Vec<i64>, RepositoryError>;

    /// Run a statement and return the affected-row count
    async fn execute(&self, statement: &Statement) -> Result<u64, RepositoryError>;

    async fn fetch_news(&self, statement: &Statement) -> Result<Vec<NewsRow>, RepositoryError>;

    async fn fetch_taxonomy(
        &self,
        statement: &Statement,
    ) -> Result<Vec<TaxonomyRow>, RepositoryError>;
}

/// PostgreSQL implementation over a connection pool
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn arguments(statement: &Statement) -> Result<PgArguments, RepositoryError> {
        let mut args = PgArguments::default();
        for param in &statement.params {
            let added = match param {
                SqlParam::Int(v) => args.add(*v),
                SqlParam::BigInt(v) => args.add(*v),
                SqlParam::Text(v) => args.add(v.clone()),
                SqlParam::BigIntArray(v) => args.add(v.clone()),
            };
            added.map_err(|e| {
                RepositoryError::Internal(format!(
                    "failed to bind parameter for {}: {}",
                    statement.operation, e
                ))
            })?;
        }
        Ok(args)
    }

    fn query_error(statement: &Statement, source: sqlx::Error) -> RepositoryError {
        tracing::error!(
            operation = %statement.operation,
            error = %source,
            "statement_failed"
        );
        RepositoryError::Query {
            operation: statement.operation.clone(),
            source,
        }
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    async fn fetch_ids(&self, statement: &Statement) -> Result<Vec<i64>, RepositoryError> {
        let args = Self::arguments(statement)?;
        sqlx::query_scalar_with::<_, i64, _>(&statement.sql, args)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error(statement, e))
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, RepositoryError> {
        let args = Self::arguments(statement)?;
        let result = sqlx::query_with(&statement.sql, args)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error(statement, e))?;
        Ok(result.rows_affected())
    }

    async fn fetch_news(&self, statement: &Statement) -> Result<Vec<NewsRow>, RepositoryError> {
        let args = Self::arguments(statement)?;
        sqlx::query_as_with::<_, NewsRow, _>(&statement.sql, args)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error(statement, e))
    }

    async fn fetch_taxonomy(
        &self,
        statement: &Statement,
    ) -> Result<Vec<TaxonomyRow>, RepositoryError> {
        let args = Self::arguments(statement)?;
        sqlx::query_as_with::<_, TaxonomyRow, _>(&statement.sql, args)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error(statement, e))
    }
}
