//! Asset handlers - Endpoint HTTP per gli asset

use crate::core::{AppError, AppState};
use crate::dtos::{AssetDTO, CreateAssetDTO, UpdateAssetDTO};
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<AssetDTO>>, AppError> {
    debug!("Listing assets");
    let assets = state.asset.get_all().await?;
    info!("Retrieved {} assets", assets.len());
    Ok(Json(assets.into_iter().map(AssetDTO::from).collect()))
}

#[instrument(skip(state), fields(asset_id = %asset_id))]
pub async fn get_asset_by_id(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<i32>, // parametro dalla URL /assets/:asset_id
) -> Result<Json<AssetDTO>, AppError> {
    let asset = state.asset.get_by_id(asset_id).await?.ok_or_else(|| {
        warn!("Asset not found");
        AppError::not_found("Asset not found")
    })?;
    Ok(Json(AssetDTO::from(asset)))
}

#[instrument(skip(state, body), fields(category_id = %body.category_id))]
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAssetDTO>,
) -> Result<Json<AssetDTO>, AppError> {
    // 1. Validare il payload
    // 2. Il service verifica che la categoria esista prima di salvare
    body.validate()?;
    let asset = state.asset.create(&body).await?;
    Ok(Json(AssetDTO::from(asset)))
}

#[instrument(skip(state, body), fields(asset_id = %asset_id))]
pub async fn update_asset(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<i32>,
    Json(body): Json<UpdateAssetDTO>,
) -> Result<Json<&'static str>, AppError> {
    body.validate()?;
    Ok(Json(state.asset.update(asset_id, &body).await?))
}

#[instrument(skip(state), fields(asset_id = %asset_id))]
pub async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<i32>,
) -> Result<Json<&'static str>, AppError> {
    Ok(Json(state.asset.delete(asset_id).await?))
}
