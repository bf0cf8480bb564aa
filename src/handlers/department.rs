//! Department handlers - Endpoint HTTP per i reparti

use crate::core::{AppError, AppState};
use crate::dtos::{CreateDepartmentDTO, UpdateDepartmentDTO};
use crate::entities::Department;
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Department>>, AppError> {
    Ok(Json(state.department.get_all().await?))
}

#[instrument(skip(state), fields(department_id = %department_id))]
pub async fn get_department_by_id(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
) -> Result<Json<Department>, AppError> {
    let department = state
        .department
        .get_by_id(department_id)
        .await?
        .ok_or_else(|| {
            warn!("Department not found");
            AppError::not_found("Department not found")
        })?;
    Ok(Json(department))
}

#[instrument(skip(state, body))]
pub async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateDepartmentDTO>,
) -> Result<Json<Department>, AppError> {
    body.validate()?;
    Ok(Json(state.department.create(&body).await?))
}

#[instrument(skip(state, body), fields(department_id = %department_id))]
pub async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
    Json(body): Json<UpdateDepartmentDTO>,
) -> Result<Json<&'static str>, AppError> {
    body.validate()?;
    Ok(Json(state.department.update(department_id, &body).await?))
}

#[instrument(skip(state), fields(department_id = %department_id))]
pub async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
) -> Result<Json<&'static str>, AppError> {
    Ok(Json(state.department.delete(department_id).await?))
}
