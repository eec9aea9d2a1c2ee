use std::sync::Arc;

use super::bulk::{bulk_delete, bulk_insert, bulk_update};
use super::executor::SqlExecutor;
use super::query_builder::Statement;
use super::tables::{InsertRow, TableSpec, UpdateRow};
use crate::application::ports::RepositoryError;

/// Bulk writes against one entity table
///
/// Empty batches never reach the executor and yield an empty id list.
pub struct EntityStore {
    table: &'static TableSpec,
    executor: Arc<dyn SqlExecutor>,
}

impl EntityStore {
    pub fn new(table: &'static TableSpec, executor: Arc<dyn SqlExecutor>) -> Self {
        Self { table, executor }
    }

    pub fn table(&self) -> &'static TableSpec {
        self.table
    }

    pub fn executor(&self) -> &dyn SqlExecutor {
        self.executor.as_ref()
    }

    pub async fn insert<R: InsertRow + Sync>(
        &self,
        rows: &[R],
    ) -> Result<Vec<i64>, RepositoryError> {
        self.returning_ids(bulk_insert(self.table, rows), rows.len())
            .await
    }

    pub async fn update<R: UpdateRow + Sync>(
        &self,
        rows: &[R],
    ) -> Result<Vec<i64>, RepositoryError> {
        self.returning_ids(bulk_update(self.table, rows), rows.len())
            .await
    }

    pub async fn delete(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError> {
        self.returning_ids(bulk_delete(self.table, ids), ids.len())
            .await
    }

    async fn returning_ids(
        &self,
        statement: Option<Statement>,
        requested: usize,
    ) -> Result<Vec<i64>, RepositoryError> {
        let Some(statement) = statement else {
            tracing::debug!(table = self.table.name, "empty batch skipped");
            return Ok(Vec::new());
        };

        let ids = self.executor.fetch_ids(&statement).await?;
        if ids.len() < requested {
            tracing::info!(
                operation = %statement.operation,
                requested,
                affected = ids.len(),
                "partial batch"
            );
        }
        Ok(ids)
    }
}
