use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Ward belonging to a district
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Ward {
    #[schema(example = "00001")]
    pub code: String,
    pub name: String,
    pub name_en: String,
    pub full_name: String,
    pub full_name_en: String,
    pub code_name: String,
    #[schema(example = "001")]
    pub district_code: String,
    pub administrative_unit_id: i32,
}
