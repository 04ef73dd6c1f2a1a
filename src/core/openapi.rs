use utoipa::{Modify, OpenApi};

use crate::features::locations::{handlers as locations_handlers, models as locations_models};
use crate::shared::types::Envelope;

#[derive(OpenApi)]
#[openapi(
    paths(
        locations_handlers::list_provinces,
        locations_handlers::list_districts,
        locations_handlers::list_wards,
    ),
    components(
        schemas(
            locations_models::Province,
            locations_models::District,
            locations_models::Ward,
            Envelope<Vec<locations_models::Province>>,
            Envelope<Vec<locations_models::District>>,
            Envelope<Vec<locations_models::Ward>>,
        )
    ),
    tags(
        (name = "locations", description = "Administrative divisions (provinces, districts, wards)"),
    ),
    info(
        title = "Location API",
        version = "0.1.0",
        description = "Read-only lookup of provinces, districts and wards",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_location_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/location/province",
            "/api/location/district",
            "/api/location/ward",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_info_modifier_overrides_defaults() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Units".to_string(),
            version: "2.0.0".to_string(),
            description: "internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Units");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("internal"));
    }
}
