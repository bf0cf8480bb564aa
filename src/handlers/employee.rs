//! Employee handlers - Endpoint HTTP per i dipendenti

use crate::core::{AppError, AppState};
use crate::dtos::{CreateEmployeeDTO, EmployeeDTO, UpdateEmployeeDTO};
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeDTO>>, AppError> {
    let employees = state.employee.get_all().await?;
    Ok(Json(employees.into_iter().map(EmployeeDTO::from).collect()))
}

#[instrument(skip(state), fields(employee_id = %employee_id))]
pub async fn get_employee_by_id(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<EmployeeDTO>, AppError> {
    let employee = state.employee.get_by_id(employee_id).await?.ok_or_else(|| {
        warn!("Employee not found");
        AppError::not_found("Employee not found")
    })?;
    Ok(Json(EmployeeDTO::from(employee)))
}

#[instrument(skip(state, body), fields(department_id = %body.department_id))]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateEmployeeDTO>,
) -> Result<Json<EmployeeDTO>, AppError> {
    body.validate()?;
    let employee = state.employee.create(&body).await?;
    Ok(Json(EmployeeDTO::from(employee)))
}

#[instrument(skip(state, body), fields(employee_id = %employee_id))]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
    Json(body): Json<UpdateEmployeeDTO>,
) -> Result<Json<&'static str>, AppError> {
    body.validate()?;
    Ok(Json(state.employee.update(employee_id, &body).await?))
}

#[instrument(skip(state), fields(employee_id = %employee_id))]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<&'static str>, AppError> {
    Ok(Json(state.employee.delete(employee_id).await?))
}
