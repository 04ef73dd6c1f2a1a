//! Read access to the location tables.
//!
//! Handlers never talk to the database directly; they go through a
//! [`LocationStore`] injected at startup so the backing store can be swapped.

mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::locations::models::{District, Province, Ward};

pub use postgres::PgLocationStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Filtered scans over the three reference tables.
///
/// A `None` filter means an unfiltered scan. Filters are exact,
/// case-sensitive code matches; an unknown code yields an empty list.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn list_provinces(&self) -> Result<Vec<Province>, StoreError>;

    async fn list_districts(&self, province_code: Option<&str>)
        -> Result<Vec<District>, StoreError>;

    async fn list_wards(&self, district_code: Option<&str>) -> Result<Vec<Ward>, StoreError>;
}
