//! Asset directory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, AssetPage, AssetPageQuery, AssetRequest, AssetStatistics, AssetTypeCounts},
        enums::AssetStatus,
    },
    AppState,
};

/// List all assets
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    responses(
        (status = 200, description = "All assets", body = Vec<Asset>)
    )
)]
pub async fn list_assets(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list().await?;
    Ok(Json(assets))
}

/// List assets one page at a time
#[utoipa::path(
    get,
    path = "/assets/paginated",
    tag = "assets",
    params(AssetPageQuery),
    responses(
        (status = 200, description = "One page of assets", body = AssetPage),
        (status = 400, description = "Invalid page size or sort field", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_assets_paginated(
    State(state): State<AppState>,
    Query(query): Query<AssetPageQuery>,
) -> AppResult<Json<AssetPage>> {
    let page = state.services.assets.list_page(&query).await?;
    Ok(Json(page))
}

/// Get asset by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = i64, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details", body = Asset),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Asset>> {
    let asset = state.services.assets.get_by_id(id).await?;
    Ok(Json(asset))
}

/// Create an asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = AssetRequest,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Invalid data or duplicate serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_asset(
    State(state): State<AppState>,
    Json(data): Json<AssetRequest>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let asset = state.services.assets.create(data).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Update an asset
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = i64, Path, description = "Asset ID")),
    request_body = AssetRequest,
    responses(
        (status = 200, description = "Asset updated", body = Asset),
        (status = 400, description = "Unknown asset, invalid data, serial number in use, or status change not allowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<AssetRequest>,
) -> AppResult<Json<Asset>> {
    let asset = state
        .services
        .assets
        .update(id, data)
        .await
        .map_err(AppError::on_write)?;
    Ok(Json(asset))
}

/// Delete an asset
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = i64, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 400, description = "Asset has assignment history", body = crate::error::ErrorResponse),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List assets of one type
#[utoipa::path(
    get,
    path = "/assets/type/{asset_type}",
    tag = "assets",
    params(("asset_type" = String, Path, description = "Asset type, e.g. Laptop")),
    responses(
        (status = 200, description = "Assets of the type", body = Vec<Asset>)
    )
)]
pub async fn list_assets_by_type(
    State(state): State<AppState>,
    Path(asset_type): Path<String>,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list_by_type(&asset_type).await?;
    Ok(Json(assets))
}

/// List assets in one status
#[utoipa::path(
    get,
    path = "/assets/status/{status}",
    tag = "assets",
    params(("status" = AssetStatus, Path, description = "Asset status")),
    responses(
        (status = 200, description = "Assets in the status", body = Vec<Asset>),
        (status = 400, description = "Unknown status")
    )
)]
pub async fn list_assets_by_status(
    State(state): State<AppState>,
    Path(status): Path<AssetStatus>,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list_by_status(status).await?;
    Ok(Json(assets))
}

/// Asset counts by status
#[utoipa::path(
    get,
    path = "/assets/statistics",
    tag = "assets",
    responses(
        (status = 200, description = "Asset statistics", body = AssetStatistics)
    )
)]
pub async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<AssetStatistics>> {
    let stats = state.services.assets.statistics().await?;
    Ok(Json(stats))
}

/// Asset counts by type
#[utoipa::path(
    get,
    path = "/assets/statistics/by-type",
    tag = "assets",
    responses(
        (status = 200, description = "Asset type to count", body = HashMap<String, i64>)
    )
)]
pub async fn get_counts_by_type(State(state): State<AppState>) -> AppResult<Json<AssetTypeCounts>> {
    let counts = state.services.assets.counts_by_type().await?;
    Ok(Json(counts))
}
