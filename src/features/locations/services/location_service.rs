use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{District, Province, Ward};
use crate::features::locations::store::LocationStore;

/// Service for looking up administrative divisions
pub struct LocationService {
    store: Arc<dyn LocationStore>,
}

impl LocationService {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// List every province
    pub async fn list_provinces(&self) -> Result<Vec<Province>> {
        self.store
            .list_provinces()
            .await
            .map_err(AppError::fetch("provinces"))
    }

    /// List districts, optionally only those of one province
    pub async fn list_districts(&self, province_code: Option<&str>) -> Result<Vec<District>> {
        self.store
            .list_districts(non_empty(province_code))
            .await
            .map_err(AppError::fetch("districts"))
    }

    /// List wards, optionally only those of one district
    pub async fn list_wards(&self, district_code: Option<&str>) -> Result<Vec<Ward>> {
        self.store
            .list_wards(non_empty(district_code))
            .await
            .map_err(AppError::fetch("wards"))
    }
}

/// An empty filter value means "no filter".
fn non_empty(code: Option<&str>) -> Option<&str> {
    code.filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_store, FailingLocationStore};

    fn service() -> LocationService {
        LocationService::new(Arc::new(sample_store()))
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("01")), Some("01"));
        assert_eq!(non_empty(Some(" ")), Some(" "));
    }

    #[tokio::test]
    async fn test_empty_filter_lists_everything() {
        let service = service();
        let all = service.list_districts(None).await.unwrap();
        let empty = service.list_districts(Some("")).await.unwrap();
        assert_eq!(all, empty);
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_filter_is_exact_and_case_sensitive() {
        let service = service();

        let wards = service.list_wards(Some("001")).await.unwrap();
        assert_eq!(wards.len(), 2);
        assert!(wards.iter().all(|w| w.district_code == "001"));

        assert!(service.list_wards(Some("00")).await.unwrap().is_empty());
        assert!(service.list_districts(Some("0a")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_fetch_error() {
        let service = LocationService::new(Arc::new(FailingLocationStore::new("db down")));

        let err = service.list_provinces().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Fetch {
                resource: "provinces",
                ..
            }
        ));

        let err = service.list_wards(Some("001")).await.unwrap_err();
        assert!(err.to_string().starts_with("Could not fetch wards: "));
        assert!(err.to_string().ends_with("db down"));
    }
}
