use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::middleware;
use crate::features::locations::{routes as locations_routes, LocationService};

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Assembles the full application router.
///
/// Filters run top to bottom before any handler: request id, tracing,
/// request id propagation, then the CORS filter.
pub fn build_router(
    location_service: Arc<LocationService>,
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(locations_routes::routes(location_service))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(from_fn(middleware::cors_filter)),
        )
}
