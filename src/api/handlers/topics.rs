use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Query, RawQuery, State},
    response::Json,
};
use std::sync::Arc;

use super::{taxonomy, ListQuery};
use crate::api::errors::ApiError;
use crate::application::dto::{
    ApiResponse, DeletedIds, InsertedIds, TaxonomyCreateRequest, TaxonomyDto,
    TaxonomyUpdateRequest, UpdatedIds,
};
use crate::application::use_cases::TaxonomyUseCase;

/// GET /news-topic
#[utoipa::path(
    get,
    path = "/news-topic",
    tag = "topics",
    params(
        ("pagination" = Option<String>, Query, description = "Encoded {offset, count}"),
        ("filter" = Option<String>, Query, description = "Encoded {name, news_topic_id}")
    ),
    responses(
        (status = 200, description = "Topics retrieved", body = ApiResponse<Vec<TaxonomyDto>>),
        (status = 400, description = "Malformed token")
    )
)]
pub async fn list_topics_handler(
    State(use_case): State<Arc<TaxonomyUseCase>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<TaxonomyDto>>>, ApiError> {
    taxonomy::list(&use_case, &uri, query).await
}

/// POST /news-topic
#[utoipa::path(
    post,
    path = "/news-topic",
    tag = "topics",
    request_body = Vec<TaxonomyCreateRequest>,
    responses(
        (status = 200, description = "Topics created", body = ApiResponse<InsertedIds>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_topics_handler(
    State(use_case): State<Arc<TaxonomyUseCase>>,
    payload: Result<Json<Vec<TaxonomyCreateRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse<InsertedIds>>, ApiError> {
    taxonomy::create(&use_case, payload).await
}

/// PUT /news-topic
/// Ids that do not exist are left out of `updated_id`
#[utoipa::path(
    put,
    path = "/news-topic",
    tag = "topics",
    request_body = Vec<TaxonomyUpdateRequest>,
    responses(
        (status = 200, description = "Topics updated", body = ApiResponse<UpdatedIds>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_topics_handler(
    State(use_case): State<Arc<TaxonomyUseCase>>,
    payload: Result<Json<Vec<TaxonomyUpdateRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse<UpdatedIds>>, ApiError> {
    taxonomy::update(&use_case, payload).await
}

/// DELETE /news-topic?id=1&id=2
#[utoipa::path(
    delete,
    path = "/news-topic",
    tag = "topics",
    params(("id" = Vec<i64>, Query, description = "Repeated topic ids")),
    responses(
        (status = 200, description = "Topics deleted", body = ApiResponse<DeletedIds>),
        (status = 400, description = "Missing or malformed id")
    )
)]
pub async fn delete_topics_handler(
    State(use_case): State<Arc<TaxonomyUseCase>>,
    RawQuery(query): RawQuery,
) -> Result<Json<ApiResponse<DeletedIds>>, ApiError> {
    taxonomy::delete(&use_case, query.as_deref()).await
}
