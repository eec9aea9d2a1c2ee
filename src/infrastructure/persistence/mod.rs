mod bulk;
mod entity_store;
mod executor;
mod postgres_association_repository;
mod postgres_news_repository;
mod postgres_taxonomy_repository;
mod query_builder;
mod rows;
mod tables;

pub use bulk::{assoc_delete, assoc_insert, bulk_delete, bulk_insert, bulk_update};
pub use entity_store::EntityStore;
pub use executor::{PgExecutor, SqlExecutor};
pub use postgres_association_repository::PostgresAssociationRepository;
pub use postgres_news_repository::{news_list_statement, PostgresNewsRepository};
pub use postgres_taxonomy_repository::{taxonomy_list_statement, PostgresTaxonomyRepository};
pub use query_builder::{
    Comparator, Connector, ParamExpr, SqlParam, Statement, StatementBuilder,
};
pub use rows::{NewsRow, TaxonomyRow};
pub use tables::{
    AssocRow, AssocSpec, Column, InsertRow, TableSpec, UpdateRow, NEWS_TABLE, NEWS_TAGS_ASSOC,
    NEWS_TOPICS_ASSOC, TAGS_TABLE, TOPICS_TABLE,
};

#[cfg(test)]
pub use executor::MockSqlExecutor;
