use std::sync::Arc;

use super::response_cache::ResponseCache;
use super::non_empty;
use crate::application::dto::{
    CreateNewsRequest, NewsDto, NewsTagsAssocRequest, NewsTopicsAssocRequest, UpdateNewsRequest,
};
use crate::application::errors::UseCaseError;
use crate::application::ports::{AssociationRepository, NewsRepository, RepositoryError};
use crate::application::token;
use crate::domain::entities::{Association, NewsDraft, NewsUpdate};
use crate::domain::value_objects::{NewsFilter, Pagination};

/// Use case: news articles and their topic/tag assignments
pub struct NewsUseCase {
    news_repo: Arc<dyn NewsRepository>,
    topics_assoc: Arc<dyn AssociationRepository>,
    tags_assoc: Arc<dyn AssociationRepository>,
    cache: ResponseCache,
}

impl NewsUseCase {
    pub fn new(
        news_repo: Arc<dyn NewsRepository>,
        topics_assoc: Arc<dyn AssociationRepository>,
        tags_assoc: Arc<dyn AssociationRepository>,
        cache: ResponseCache,
    ) -> Self {
        Self {
            news_repo,
            topics_assoc,
            tags_assoc,
            cache,
        }
    }

    /// Insert one article and return its id
    pub async fn create_single(&self, request: CreateNewsRequest) -> Result<i64, UseCaseError> {
        let draft = NewsDraft::new(request.title, request.content, request.status)?;

        let ids = self.news_repo.create_bulk(&[draft]).await?;
        let id = ids.first().copied().ok_or_else(|| {
            RepositoryError::Internal("news insert returned no id".to_string())
        })?;

        self.cache.invalidate().await;
        tracing::info!(news_id = id, "news created");
        Ok(id)
    }

    pub async fn update_single(
        &self,
        news_id: i64,
        request: UpdateNewsRequest,
    ) -> Result<(), UseCaseError> {
        let draft = NewsDraft::new(request.title, request.content, request.status)?;
        let update = NewsUpdate::new(news_id, draft)?;

        let ids = self.news_repo.update_bulk(&[update]).await?;
        self.cache.invalidate().await;

        if ids.is_empty() {
            return Err(UseCaseError::NotFound(format!("news {}", news_id)));
        }
        tracing::info!(news_id, "news updated");
        Ok(())
    }

    /// Remove the article's topic and tag links, then the article itself
    pub async fn delete_single(&self, news_id: i64) -> Result<(), UseCaseError> {
        let topics = self.topics_assoc.clean_assoc(&[news_id]).await?;
        let tags = self.tags_assoc.clean_assoc(&[news_id]).await?;
        let ids = self.news_repo.delete_bulk(&[news_id]).await?;
        self.cache.invalidate().await;

        if ids.is_empty() {
            return Err(UseCaseError::NotFound(format!("news {}", news_id)));
        }
        tracing::info!(news_id, topics, tags, "news deleted");
        Ok(())
    }

    /// Fetch one article through the cache
    pub async fn get_single(&self, cache_key: &str, news_id: i64) -> Result<NewsDto, UseCaseError> {
        if let Some(cached) = self.cache.read::<NewsDto>(cache_key).await {
            return Ok(cached);
        }

        let news = self
            .news_repo
            .list(Pagination::first(), Some(NewsFilter::by_id(news_id)))
            .await?;
        let dto = news
            .into_iter()
            .next()
            .map(NewsDto::from)
            .ok_or_else(|| UseCaseError::NotFound(format!("news {}", news_id)))?;

        self.cache.write(cache_key, &dto).await;
        Ok(dto)
    }

    /// List articles through the cache. The pagination token is required;
    /// the filter token is optional.
    pub async fn list(
        &self,
        cache_key: &str,
        pagination: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Vec<NewsDto>, UseCaseError> {
        let pagination = non_empty(pagination).ok_or_else(|| {
            UseCaseError::InvalidRequest(
                "pagination cannot be blank, use the pagination query parameter".to_string(),
            )
        })?;

        if let Some(cached) = self.cache.read::<Vec<NewsDto>>(cache_key).await {
            return Ok(cached);
        }

        let pagination: Pagination = token::decode(pagination)?;
        let filter: Option<NewsFilter> = non_empty(filter).map(token::decode).transpose()?;

        let news = self.news_repo.list(pagination, filter).await?;
        let dtos: Vec<NewsDto> = news.into_iter().map(NewsDto::from).collect();

        self.cache.write(cache_key, &dtos).await;
        Ok(dtos)
    }

    pub async fn assign_topics(&self, request: NewsTopicsAssocRequest) -> Result<(), UseCaseError> {
        let assoc = Association::new(request.news_id, request.news_topic_ids);
        self.topics_assoc.create_assoc(&[assoc]).await?;
        self.cache.invalidate().await;
        Ok(())
    }

    pub async fn assign_tags(&self, request: NewsTagsAssocRequest) -> Result<(), UseCaseError> {
        let assoc = Association::new(request.news_id, request.news_tag_ids);
        self.tags_assoc.create_assoc(&[assoc]).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}
