use super::handlers;
use crate::service::{ExtractionService, SubmissionService};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::InvalidHeaderValue, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// 构建路由
pub fn create_router(
    extraction: Arc<ExtractionService>,
    submission: Arc<SubmissionService>,
    allowed_origin: &str,
    max_body_bytes: usize,
) -> Result<Router, InvalidHeaderValue> {
    // 只回显匹配的 Origin
    let origin = if allowed_origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::list([HeaderValue::from_str(allowed_origin)?])
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let upload_routes = Router::new()
        .route("/upload", post(handlers::upload))
        .with_state(extraction);

    let submit_routes = Router::new()
        .route("/submit", post(handlers::submit))
        .with_state(submission);

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(upload_routes)
        .merge(submit_routes)
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_body_bytes))
                .layer(cors),
        );

    Ok(app)
}
