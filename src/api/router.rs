use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    assign_tags_handler, assign_topics_handler, create_news_handler, create_tags_handler,
    create_topics_handler, delete_news_handler, delete_tags_handler, delete_topics_handler,
    get_news_handler, health_handler, list_news_handler, list_tags_handler, list_topics_handler,
    readiness_handler, update_news_handler, update_tags_handler, update_topics_handler,
};
use crate::api::middleware::{cors, metrics};
use crate::api::openapi;
use crate::application::use_cases::{NewsUseCase, TaxonomyUseCase};
use crate::config::Config;

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub news_use_case: Arc<NewsUseCase>,
    pub topics_use_case: Arc<TaxonomyUseCase>,
    pub tags_use_case: Arc<TaxonomyUseCase>,
    pub config: Config,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let news_state = Arc::clone(&state.news_use_case);
    let topics_state = Arc::clone(&state.topics_use_case);
    let tags_state = Arc::clone(&state.tags_use_case);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        .route(
            "/news",
            get(list_news_handler)
                .post(create_news_handler)
                .with_state(Arc::clone(&news_state)),
        )
        .route(
            "/news/{news_id}",
            get(get_news_handler)
                .put(update_news_handler)
                .delete(delete_news_handler)
                .with_state(Arc::clone(&news_state)),
        )
        .route(
            "/assign/news/news-topic",
            post(assign_topics_handler).with_state(Arc::clone(&news_state)),
        )
        .route(
            "/assign/news/news-tag",
            post(assign_tags_handler).with_state(news_state),
        )
        .route(
            "/news-topic",
            get(list_topics_handler)
                .post(create_topics_handler)
                .put(update_topics_handler)
                .delete(delete_topics_handler)
                .with_state(topics_state),
        )
        .route(
            "/news-tag",
            get(list_tags_handler)
                .post(create_tags_handler)
                .put(update_tags_handler)
                .delete(delete_tags_handler)
                .with_state(tags_state),
        )
        .merge(openapi::swagger_ui())
        .layer(RequestBodyLimitLayer::new(state.config.max_request_body_bytes))
        .layer(cors::create_cors_layer(&state.config.allowed_origins))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}
