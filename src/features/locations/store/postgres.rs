use async_trait::async_trait;
use sqlx::PgPool;

use super::{LocationStore, StoreError};
use crate::features::locations::models::{District, Province, Ward};

// Nullable columns collapse to zero values so rows always decode.
// Kept as macros so the filtered variants can be built with `concat!`.
macro_rules! province_select {
    () => {
        r#"
    SELECT code,
           COALESCE(name, '') AS name,
           COALESCE(name_en, '') AS name_en,
           COALESCE(full_name, '') AS full_name,
           COALESCE(full_name_en, '') AS full_name_en,
           COALESCE(code_name, '') AS code_name,
           COALESCE(administrative_unit_id, 0)::INT4 AS administrative_unit_id
    FROM provinces
"#
    };
}

macro_rules! district_select {
    () => {
        r#"
    SELECT code,
           COALESCE(name, '') AS name,
           COALESCE(name_en, '') AS name_en,
           COALESCE(full_name, '') AS full_name,
           COALESCE(full_name_en, '') AS full_name_en,
           COALESCE(code_name, '') AS code_name,
           COALESCE(province_code, '') AS province_code,
           COALESCE(administrative_unit_id, 0)::INT4 AS administrative_unit_id
    FROM districts
"#
    };
}

macro_rules! ward_select {
    () => {
        r#"
    SELECT code,
           COALESCE(name, '') AS name,
           COALESCE(name_en, '') AS name_en,
           COALESCE(full_name, '') AS full_name,
           COALESCE(full_name_en, '') AS full_name_en,
           COALESCE(code_name, '') AS code_name,
           COALESCE(district_code, '') AS district_code,
           COALESCE(administrative_unit_id, 0)::INT4 AS administrative_unit_id
    FROM wards
"#
    };
}

const PROVINCE_SELECT: &str = province_select!();
const DISTRICT_SELECT: &str = district_select!();
const DISTRICTS_BY_PROVINCE_SELECT: &str =
    concat!(district_select!(), "    WHERE province_code = $1\n");
const WARD_SELECT: &str = ward_select!();
const WARDS_BY_DISTRICT_SELECT: &str =
    concat!(ward_select!(), "    WHERE district_code = $1\n");

/// [`LocationStore`] backed by the PostgreSQL reference tables
pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn list_provinces(&self) -> Result<Vec<Province>, StoreError> {
        let provinces = sqlx::query_as::<_, Province>(PROVINCE_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch provinces: {:?}", e);
                StoreError::Database(e)
            })?;

        Ok(provinces)
    }

    async fn list_districts(
        &self,
        province_code: Option<&str>,
    ) -> Result<Vec<District>, StoreError> {
        let districts = match province_code {
            Some(code) => {
                sqlx::query_as::<_, District>(DISTRICTS_BY_PROVINCE_SELECT)
                    .bind(code)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, District>(DISTRICT_SELECT)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch districts (province_code={:?}): {:?}",
                province_code,
                e
            );
            StoreError::Database(e)
        })?;

        Ok(districts)
    }

    async fn list_wards(&self, district_code: Option<&str>) -> Result<Vec<Ward>, StoreError> {
        let wards = match district_code {
            Some(code) => {
                sqlx::query_as::<_, Ward>(WARDS_BY_DISTRICT_SELECT)
                    .bind(code)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, Ward>(WARD_SELECT)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch wards (district_code={:?}): {:?}",
                district_code,
                e
            );
            StoreError::Database(e)
        })?;

        Ok(wards)
    }
}
