use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::{json_body, validate_payload};
use crate::application::dto::{NewsTagsAssocRequest, NewsTopicsAssocRequest};
use crate::application::use_cases::NewsUseCase;

/// POST /assign/news/news-topic
#[utoipa::path(
    post,
    path = "/assign/news/news-topic",
    tag = "news",
    request_body = NewsTopicsAssocRequest,
    responses(
        (status = 204, description = "Topics assigned"),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Association could not be stored")
    )
)]
pub async fn assign_topics_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    payload: Result<Json<NewsTopicsAssocRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let request = json_body(payload)?;
    validate_payload(&request)?;

    use_case.assign_topics(request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /assign/news/news-tag
#[utoipa::path(
    post,
    path = "/assign/news/news-tag",
    tag = "news",
    request_body = NewsTagsAssocRequest,
    responses(
        (status = 204, description = "Tags assigned"),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Association could not be stored")
    )
)]
pub async fn assign_tags_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    payload: Result<Json<NewsTagsAssocRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let request = json_body(payload)?;
    validate_payload(&request)?;

    use_case.assign_tags(request).await?;
    Ok(StatusCode::NO_CONTENT)
}
