//! Category handlers - Endpoint HTTP per le categorie

use crate::core::{AppError, AppState};
use crate::dtos::{CreateCategoryDTO, UpdateCategoryDTO};
use crate::entities::Category;
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    debug!("Listing categories");
    Ok(Json(state.category.get_all().await?))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn get_category_by_id(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let category = state.category.get_by_id(category_id).await?.ok_or_else(|| {
        warn!("Category not found");
        AppError::not_found("Category not found")
    })?;
    Ok(Json(category))
}

#[instrument(skip(state, body))]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCategoryDTO>,
) -> Result<Json<Category>, AppError> {
    body.validate()?;
    Ok(Json(state.category.create(&body).await?))
}

#[instrument(skip(state, body), fields(category_id = %category_id))]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    Json(body): Json<UpdateCategoryDTO>,
) -> Result<Json<&'static str>, AppError> {
    body.validate()?;
    Ok(Json(state.category.update(category_id, &body).await?))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<Json<&'static str>, AppError> {
    Ok(Json(state.category.delete(category_id).await?))
}
