use utoipa::IntoParams;

use crate::core::extractor::{first_value, FromQueryPairs};

/// Query parameters for listing districts
#[derive(Debug, Clone, Default, IntoParams)]
pub struct DistrictQuery {
    /// Only return districts of this province (exact match). Empty means all.
    /// When repeated, the first value wins.
    #[param(example = "01")]
    pub province_code: Option<String>,
}

impl FromQueryPairs for DistrictQuery {
    fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            province_code: first_value(pairs, "province_code"),
        }
    }
}

/// Query parameters for listing wards
#[derive(Debug, Clone, Default, IntoParams)]
pub struct WardQuery {
    /// Only return wards of this district (exact match). Empty means all.
    /// When repeated, the first value wins.
    #[param(example = "001")]
    pub district_code: Option<String>,
}

impl FromQueryPairs for WardQuery {
    fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            district_code: first_value(pairs, "district_code"),
        }
    }
}
