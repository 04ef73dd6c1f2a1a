use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Top level of the administrative hierarchy
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Province {
    #[schema(example = "01")]
    pub code: String,
    #[schema(example = "Hà Nội")]
    pub name: String,
    pub name_en: String,
    pub full_name: String,
    pub full_name_en: String,
    pub code_name: String,
    pub administrative_unit_id: i32,
}
