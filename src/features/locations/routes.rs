use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;
use crate::shared::constants::API_PREFIX;

/// Create routes for the locations feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<LocationService>) -> Router {
    let api = Router::new()
        .route("/province", get(handlers::list_provinces))
        .route("/district", get(handlers::list_districts))
        .route("/ward", get(handlers::list_wards))
        .with_state(service);

    Router::new().nest(API_PREFIX, api)
}
