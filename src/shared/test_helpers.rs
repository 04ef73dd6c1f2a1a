use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::address::en::CityName;
use fake::Fake;

use crate::core::app::build_router;
use crate::core::openapi::ApiDoc;
use crate::features::locations::models::{District, Province, Ward};
use crate::features::locations::store::{LocationStore, StoreError};
use crate::features::locations::LocationService;
use utoipa::OpenApi;

/// In-memory [`LocationStore`] with the same filtering rules as the database
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocationStore {
    pub provinces: Vec<Province>,
    pub districts: Vec<District>,
    pub wards: Vec<Ward>,
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn list_provinces(&self) -> Result<Vec<Province>, StoreError> {
        Ok(self.provinces.clone())
    }

    async fn list_districts(
        &self,
        province_code: Option<&str>,
    ) -> Result<Vec<District>, StoreError> {
        Ok(self
            .districts
            .iter()
            .filter(|d| province_code.map_or(true, |code| d.province_code == code))
            .cloned()
            .collect())
    }

    async fn list_wards(&self, district_code: Option<&str>) -> Result<Vec<Ward>, StoreError> {
        Ok(self
            .wards
            .iter()
            .filter(|w| district_code.map_or(true, |code| w.district_code == code))
            .cloned()
            .collect())
    }
}

/// Store whose every read fails with a driver error carrying the given message
pub struct FailingLocationStore {
    message: String,
}

impl FailingLocationStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Database(sqlx::Error::Protocol(
            self.message.clone(),
        )))
    }
}

#[async_trait]
impl LocationStore for FailingLocationStore {
    async fn list_provinces(&self) -> Result<Vec<Province>, StoreError> {
        self.fail()
    }

    async fn list_districts(&self, _: Option<&str>) -> Result<Vec<District>, StoreError> {
        self.fail()
    }

    async fn list_wards(&self, _: Option<&str>) -> Result<Vec<Ward>, StoreError> {
        self.fail()
    }
}

pub fn province(code: &str, name: &str) -> Province {
    Province {
        code: code.to_string(),
        name: name.to_string(),
        name_en: name.to_string(),
        full_name: format!("Thành phố {}", name),
        full_name_en: format!("{} City", name),
        code_name: name.to_lowercase().replace(' ', "_"),
        administrative_unit_id: 1,
    }
}

pub fn district(code: &str, province_code: &str, name: &str) -> District {
    District {
        code: code.to_string(),
        name: name.to_string(),
        name_en: name.to_string(),
        full_name: format!("Quận {}", name),
        full_name_en: format!("{} District", name),
        code_name: name.to_lowercase().replace(' ', "_"),
        province_code: province_code.to_string(),
        administrative_unit_id: 5,
    }
}

pub fn ward(code: &str, district_code: &str, name: &str) -> Ward {
    Ward {
        code: code.to_string(),
        name: name.to_string(),
        name_en: name.to_string(),
        full_name: format!("Phường {}", name),
        full_name_en: format!("{} Ward", name),
        code_name: name.to_lowercase().replace(' ', "_"),
        district_code: district_code.to_string(),
        administrative_unit_id: 8,
    }
}

/// One province, one district, one ward.
pub fn minimal_store() -> InMemoryLocationStore {
    InMemoryLocationStore {
        provinces: vec![province("01", "Hà Nội")],
        districts: vec![district("001", "01", "Ba Đình")],
        wards: vec![ward("00001", "001", "Phúc Xá")],
    }
}

/// Two provinces, three districts, three wards.
pub fn sample_store() -> InMemoryLocationStore {
    InMemoryLocationStore {
        provinces: vec![province("01", "Hà Nội"), province("79", "Hồ Chí Minh")],
        districts: vec![
            district("001", "01", "Ba Đình"),
            district("002", "01", "Hoàn Kiếm"),
            district("760", "79", "Quận 1"),
        ],
        wards: vec![
            ward("00001", "001", "Phúc Xá"),
            ward("00004", "001", "Trúc Bạch"),
            ward("26734", "760", "Tân Định"),
        ],
    }
}

/// Random hierarchy where every child references an existing parent.
pub fn random_store(province_count: usize) -> InMemoryLocationStore {
    let provinces: Vec<Province> = (0..province_count)
        .map(|i| province(&format!("{:02}", i + 1), &CityName().fake::<String>()))
        .collect();

    let districts: Vec<District> = (0..(5..25).fake::<usize>())
        .map(|i| {
            let parent = &provinces[(0..provinces.len()).fake::<usize>()];
            district(
                &format!("{:03}", i + 1),
                &parent.code,
                &CityName().fake::<String>(),
            )
        })
        .collect();

    let wards: Vec<Ward> = (0..(10..60).fake::<usize>())
        .map(|i| {
            let parent = &districts[(0..districts.len()).fake::<usize>()];
            ward(
                &format!("{:05}", i + 1),
                &parent.code,
                &CityName().fake::<String>(),
            )
        })
        .collect();

    InMemoryLocationStore {
        provinces,
        districts,
        wards,
    }
}

/// Full application router over the given store
pub fn test_server(store: impl LocationStore + 'static) -> TestServer {
    let service = Arc::new(LocationService::new(Arc::new(store)));
    TestServer::new(build_router(service, ApiDoc::openapi())).unwrap()
}
