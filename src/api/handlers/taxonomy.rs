//! Request handling shared by the topic and tag endpoints

use axum::{extract::rejection::JsonRejection, http::Uri, response::Json};

use super::{cache_key, ListQuery};
use crate::api::errors::ApiError;
use crate::api::middleware::validation::{json_body, validate_all};
use crate::application::dto::{
    ApiResponse, DeletedIds, InsertedIds, TaxonomyCreateRequest, TaxonomyDto,
    TaxonomyUpdateRequest, UpdatedIds,
};
use crate::application::use_cases::TaxonomyUseCase;

/// Collect every `id` parameter of a raw query string
pub fn parse_ids(query: Option<&str>) -> Result<Vec<i64>, ApiError> {
    let ids = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            ApiError::bad_request("Failed parsing id, check that every id is a valid number")
        })?;

    if ids.is_empty() {
        return Err(ApiError::bad_request(
            "At least one id query parameter is required",
        ));
    }
    Ok(ids)
}

fn title(use_case: &TaxonomyUseCase) -> &'static str {
    use_case.kind().plural_title()
}

pub async fn list(
    use_case: &TaxonomyUseCase,
    uri: &Uri,
    query: ListQuery,
) -> Result<Json<ApiResponse<Vec<TaxonomyDto>>>, ApiError> {
    let items = use_case
        .list(
            &cache_key(uri),
            query.pagination.as_deref(),
            query.filter.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        format!("Success Getting {}", title(use_case)),
        items,
    )))
}

pub async fn create(
    use_case: &TaxonomyUseCase,
    payload: Result<Json<Vec<TaxonomyCreateRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse<InsertedIds>>, ApiError> {
    let requests = json_body(payload)?;
    validate_all(&requests)?;

    let inserted_id = use_case.create(requests).await?;
    Ok(Json(ApiResponse::ok(
        format!("Success Create {}", title(use_case)),
        InsertedIds { inserted_id },
    )))
}

pub async fn update(
    use_case: &TaxonomyUseCase,
    payload: Result<Json<Vec<TaxonomyUpdateRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse<UpdatedIds>>, ApiError> {
    let requests = json_body(payload)?;
    validate_all(&requests)?;

    let updated_id = use_case.update(requests).await?;
    Ok(Json(ApiResponse::ok(
        format!("Success Update {}", title(use_case)),
        UpdatedIds { updated_id },
    )))
}

pub async fn delete(
    use_case: &TaxonomyUseCase,
    query: Option<&str>,
) -> Result<Json<ApiResponse<DeletedIds>>, ApiError> {
    let ids = parse_ids(query)?;

    let deleted_id = use_case.delete(&ids).await?;
    Ok(Json(ApiResponse::ok(
        format!("Success Delete {}", title(use_case)),
        DeletedIds { deleted_id },
    )))
}
