//! AssetEmployee handlers - Endpoint HTTP per le assegnazioni asset-dipendente

use crate::core::{AppError, AppState};
use crate::dtos::AssetEmployeeDTO;
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[instrument(skip(state))]
pub async fn list_asset_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AssetEmployeeDTO>>, AppError> {
    debug!("Listing asset assignments");
    let assignments = state.asset_employee.get_all().await?;
    Ok(Json(
        assignments.into_iter().map(AssetEmployeeDTO::from).collect(),
    ))
}

#[instrument(skip(state), fields(employee_id = %employee_id))]
pub async fn get_asset_by_employee_id(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<AssetEmployeeDTO>, AppError> {
    let assignment = state
        .asset_employee
        .get_by_employee_id(employee_id)
        .await?
        .ok_or_else(|| {
            warn!("No asset assigned to employee");
            AppError::not_found("Asset assignment not found")
        })?;
    Ok(Json(AssetEmployeeDTO::from(assignment)))
}

#[instrument(skip(state, body), fields(asset_id = %body.asset_id, employee_id = %body.employee_id))]
pub async fn create_asset_employee(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AssetEmployeeDTO>,
) -> Result<Json<AssetEmployeeDTO>, AppError> {
    let assignment = state.asset_employee.create(&body).await?;
    Ok(Json(AssetEmployeeDTO::from(assignment)))
}

#[instrument(skip(state, body), fields(asset_id = %asset_id, employee_id = %employee_id))]
pub async fn update_asset_employee(
    State(state): State<Arc<AppState>>,
    Path((asset_id, employee_id)): Path<(i32, i32)>,
    Json(body): Json<AssetEmployeeDTO>,
) -> Result<Json<&'static str>, AppError> {
    Ok(Json(
        state
            .asset_employee
            .update((asset_id, employee_id), &body)
            .await?,
    ))
}

#[instrument(skip(state), fields(asset_id = %asset_id, employee_id = %employee_id))]
pub async fn delete_asset_employee(
    State(state): State<Arc<AppState>>,
    Path((asset_id, employee_id)): Path<(i32, i32)>,
) -> Result<Json<&'static str>, AppError> {
    Ok(Json(
        state.asset_employee.delete((asset_id, employee_id)).await?,
    ))
}
