mod association_repository;
mod cache_store;
mod news_repository;
mod taxonomy_repository;

pub use association_repository::AssociationRepository;
pub use cache_store::{CacheError, CacheStore};
pub use news_repository::{NewsRepository, RepositoryError};
pub use taxonomy_repository::TaxonomyRepository;

#[cfg(test)]
pub use association_repository::MockAssociationRepository;
#[cfg(test)]
pub use cache_store::MockCacheStore;
#[cfg(test)]
pub use news_repository::MockNewsRepository;
#[cfg(test)]
pub use taxonomy_repository::MockTaxonomyRepository;
