use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// District belonging to a province
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct District {
    #[schema(example = "001")]
    pub code: String,
    pub name: String,
    pub name_en: String,
    pub full_name: String,
    pub full_name_en: String,
    pub code_name: String,
    #[schema(example = "01")]
    pub province_code: String,
    pub administrative_unit_id: i32,
}
