use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    CreateNewsRequest, DeletedIds, InsertedIds, NewsDto, NewsTagsAssocRequest,
    NewsTopicsAssocRequest, TaxonomyCreateRequest, TaxonomyDto, TaxonomyUpdateRequest,
    UpdateNewsRequest, UpdatedIds,
};
use crate::domain::value_objects::{NewsFilter, Pagination, TagFilter, TopicFilter};

/// OpenAPI specification for the news service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "News Service API",
        version = "1.0.0",
        description = "News articles with topics and tags. List endpoints take `pagination` and `filter` as URL-safe Base64 JSON tokens."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::news::list_news_handler,
        crate::api::handlers::news::get_news_handler,
        crate::api::handlers::news::create_news_handler,
        crate::api::handlers::news::update_news_handler,
        crate::api::handlers::news::delete_news_handler,
        crate::api::handlers::assoc::assign_topics_handler,
        crate::api::handlers::assoc::assign_tags_handler,
        crate::api::handlers::topics::list_topics_handler,
        crate::api::handlers::topics::create_topics_handler,
        crate::api::handlers::topics::update_topics_handler,
        crate::api::handlers::topics::delete_topics_handler,
        crate::api::handlers::tags::list_tags_handler,
        crate::api::handlers::tags::create_tags_handler,
        crate::api::handlers::tags::update_tags_handler,
        crate::api::handlers::tags::delete_tags_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ReadinessResponse,
            NewsDto,
            CreateNewsRequest,
            UpdateNewsRequest,
            TaxonomyDto,
            TaxonomyCreateRequest,
            TaxonomyUpdateRequest,
            NewsTopicsAssocRequest,
            NewsTagsAssocRequest,
            InsertedIds,
            UpdatedIds,
            DeletedIds,
            Pagination,
            NewsFilter,
            TopicFilter,
            TagFilter,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "news", description = "News articles and their assignments"),
        (name = "topics", description = "News topics"),
        (name = "tags", description = "News tags")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
