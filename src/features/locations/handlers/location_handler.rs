use std::sync::Arc;

use axum::extract::State;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::locations::dtos::{DistrictQuery, WardQuery};
use crate::features::locations::models::{District, Province, Ward};
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, Envelope};

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/location/province",
    responses(
        (status = 200, description = "List of provinces", body = Envelope<Vec<Province>>),
        (status = 400, description = "Provinces could not be fetched", body = Envelope<Vec<Province>>)
    ),
    tag = "locations"
)]
pub async fn list_provinces(
    State(service): State<Arc<LocationService>>,
) -> Result<ApiResponse<Vec<Province>>> {
    let provinces = service.list_provinces().await?;
    Ok(ApiResponse::success(
        "Provinces fetched successfully",
        provinces,
    ))
}

/// List districts, optionally filtered by province
#[utoipa::path(
    get,
    path = "/api/location/district",
    params(DistrictQuery),
    responses(
        (status = 200, description = "List of districts", body = Envelope<Vec<District>>),
        (status = 400, description = "Districts could not be fetched", body = Envelope<Vec<District>>)
    ),
    tag = "locations"
)]
pub async fn list_districts(
    State(service): State<Arc<LocationService>>,
    AppQuery(query): AppQuery<DistrictQuery>,
) -> Result<ApiResponse<Vec<District>>> {
    let districts = service
        .list_districts(query.province_code.as_deref())
        .await?;
    Ok(ApiResponse::success(
        "Districts fetched successfully",
        districts,
    ))
}

/// List wards, optionally filtered by district
#[utoipa::path(
    get,
    path = "/api/location/ward",
    params(WardQuery),
    responses(
        (status = 200, description = "List of wards", body = Envelope<Vec<Ward>>),
        (status = 400, description = "Wards could not be fetched", body = Envelope<Vec<Ward>>)
    ),
    tag = "locations"
)]
pub async fn list_wards(
    State(service): State<Arc<LocationService>>,
    AppQuery(query): AppQuery<WardQuery>,
) -> Result<ApiResponse<Vec<Ward>>> {
    let wards = service.list_wards(query.district_code.as_deref()).await?;
    Ok(ApiResponse::success("Wards fetched successfully", wards))
}
