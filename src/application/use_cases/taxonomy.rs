use std::sync::Arc;

use super::non_empty;
use super::response_cache::ResponseCache;
use crate::application::dto::{TaxonomyCreateRequest, TaxonomyDto, TaxonomyUpdateRequest};
use crate::application::errors::UseCaseError;
use crate::application::ports::TaxonomyRepository;
use crate::application::token;
use crate::domain::entities::{TaxonomyDraft, TaxonomyUpdate};
use crate::domain::value_objects::{Pagination, TagFilter, TaxonomyFilter, TopicFilter};

/// Which taxonomy a use case serves; decides the filter token shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Topic,
    Tag,
}

impl TaxonomyKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaxonomyKind::Topic => "news topic",
            TaxonomyKind::Tag => "news tag",
        }
    }

    /// Used in response messages
    pub fn plural_title(&self) -> &'static str {
        match self {
            TaxonomyKind::Topic => "News Topics",
            TaxonomyKind::Tag => "News Tags",
        }
    }

    fn decode_filter(&self, filter: &str) -> Result<TaxonomyFilter, UseCaseError> {
        let filter: TaxonomyFilter = match self {
            TaxonomyKind::Topic => token::decode::<TopicFilter>(filter)?.into(),
            TaxonomyKind::Tag => token::decode::<TagFilter>(filter)?.into(),
        };
        Ok(filter)
    }
}

/// Use case: bulk CRUD over topics or tags
pub struct TaxonomyUseCase {
    kind: TaxonomyKind,
    repo: Arc<dyn TaxonomyRepository>,
    cache: ResponseCache,
}

impl TaxonomyUseCase {
    pub fn new(kind: TaxonomyKind, repo: Arc<dyn TaxonomyRepository>, cache: ResponseCache) -> Self {
        Self { kind, repo, cache }
    }

    pub fn kind(&self) -> TaxonomyKind {
        self.kind
    }

    pub async fn create(
        &self,
        requests: Vec<TaxonomyCreateRequest>,
    ) -> Result<Vec<i64>, UseCaseError> {
        let drafts = requests
            .into_iter()
            .map(|r| TaxonomyDraft::new(r.name))
            .collect::<Result<Vec<_>, _>>()?;

        let ids = self.repo.create_bulk(&drafts).await?;
        self.cache.invalidate().await;
        tracing::info!(kind = self.kind.label(), count = ids.len(), "created");
        Ok(ids)
    }

    /// Returns the ids that existed and were updated
    pub async fn update(
        &self,
        requests: Vec<TaxonomyUpdateRequest>,
    ) -> Result<Vec<i64>, UseCaseError> {
        let updates = requests
            .into_iter()
            .map(|r| TaxonomyUpdate::new(r.id, r.name))
            .collect::<Result<Vec<_>, _>>()?;

        let ids = self.repo.update_bulk(&updates).await?;
        self.cache.invalidate().await;
        tracing::info!(kind = self.kind.label(), count = ids.len(), "updated");
        Ok(ids)
    }

    /// Returns the ids that existed and were deleted
    pub async fn delete(&self, ids: &[i64]) -> Result<Vec<i64>, UseCaseError> {
        if ids.is_empty() {
            return Err(UseCaseError::InvalidRequest(
                "at least one id is required".to_string(),
            ));
        }

        let deleted = self.repo.delete_bulk(ids).await?;
        self.cache.invalidate().await;
        tracing::info!(kind = self.kind.label(), count = deleted.len(), "deleted");
        Ok(deleted)
    }

    /// List through the cache; both tokens are optional
    pub async fn list(
        &self,
        cache_key: &str,
        pagination: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Vec<TaxonomyDto>, UseCaseError> {
        if let Some(cached) = self.cache.read::<Vec<TaxonomyDto>>(cache_key).await {
            return Ok(cached);
        }

        let pagination: Option<Pagination> =
            non_empty(pagination).map(token::decode).transpose()?;
        let filter = non_empty(filter)
            .map(|f| self.kind.decode_filter(f))
            .transpose()?;

        let items = self.repo.list(pagination, filter).await?;
        let dtos: Vec<TaxonomyDto> = items.into_iter().map(TaxonomyDto::from).collect();

        self.cache.write(cache_key, &dtos).await;
        Ok(dtos)
    }
}
