use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, OriginalUri, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{cache_key, ListQuery};
use crate::api::errors::ApiError;
use crate::api::middleware::validation::{json_body, validate_payload};
use crate::application::dto::{
    ApiResponse, CreateNewsRequest, InsertedIds, NewsDto, UpdateNewsRequest,
};
use crate::application::use_cases::NewsUseCase;

fn news_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| {
        ApiError::bad_request("Failed parsing news id, check that it is a valid number")
    })
}

/// GET /news
/// List news; `pagination` is required
#[utoipa::path(
    get,
    path = "/news",
    tag = "news",
    params(
        ("pagination" = String, Query, description = "Encoded {offset, count}"),
        ("filter" = Option<String>, Query, description = "Encoded {status, topics, news_id, title}")
    ),
    responses(
        (status = 200, description = "News retrieved", body = ApiResponse<Vec<NewsDto>>),
        (status = 400, description = "Missing pagination or malformed token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_news_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<NewsDto>>>, ApiError> {
    let news = use_case
        .list(
            &cache_key(&uri),
            query.pagination.as_deref(),
            query.filter.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::ok("Success Getting News", news)))
}

/// GET /news/{news_id}
#[utoipa::path(
    get,
    path = "/news/{news_id}",
    tag = "news",
    params(("news_id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "News retrieved", body = ApiResponse<NewsDto>),
        (status = 400, description = "Invalid news id"),
        (status = 404, description = "News not found")
    )
)]
pub async fn get_news_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<NewsDto>>, ApiError> {
    let id = news_id(path)?;
    let news = use_case.get_single(&cache_key(&uri), id).await?;

    Ok(Json(ApiResponse::ok("Success Getting News", news)))
}

/// POST /news
#[utoipa::path(
    post,
    path = "/news",
    tag = "news",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "News created", body = ApiResponse<InsertedIds>),
        (status = 400, description = "Malformed body or unknown status"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_news_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    payload: Result<Json<CreateNewsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<InsertedIds>>), ApiError> {
    let request = json_body(payload)?;
    validate_payload(&request)?;

    let id = use_case.create_single(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Success Create News",
            InsertedIds {
                inserted_id: vec![id],
            },
        )),
    ))
}

/// PUT /news/{news_id}
#[utoipa::path(
    put,
    path = "/news/{news_id}",
    tag = "news",
    params(("news_id" = i64, Path, description = "News id")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 204, description = "News updated"),
        (status = 400, description = "Malformed body or id"),
        (status = 404, description = "News not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_news_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateNewsRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = news_id(path)?;
    let request = json_body(payload)?;
    validate_payload(&request)?;

    use_case.update_single(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /news/{news_id}
/// Also removes the article's topic and tag assignments
#[utoipa::path(
    delete,
    path = "/news/{news_id}",
    tag = "news",
    params(("news_id" = i64, Path, description = "News id")),
    responses(
        (status = 204, description = "News deleted"),
        (status = 400, description = "Invalid news id"),
        (status = 404, description = "News not found")
    )
)]
pub async fn delete_news_handler(
    State(use_case): State<Arc<NewsUseCase>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = news_id(path)?;
    use_case.delete_single(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
