//! Category service - Gestione categorie

use super::ServiceError;
use crate::dtos::{CreateCategoryDTO, UpdateCategoryDTO};
use crate::entities::Category;
use crate::repositories::{CategoryRepository, Create, Delete, Read, ReadAll, Update};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

pub const CATEGORY_UPDATED: &str = "Updated";
pub const CATEGORY_DELETED: &str = "Deleted";

pub struct CategoryService {
    categories: CategoryRepository,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            categories: CategoryRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.categories.read_all().await?)
    }

    pub async fn get_by_id(&self, category_id: i32) -> Result<Option<Category>, ServiceError> {
        Ok(self.categories.read(&category_id).await?)
    }

    #[instrument(skip(self, data))]
    pub async fn create(&self, data: &CreateCategoryDTO) -> Result<Category, ServiceError> {
        debug!("Creating category");
        let category = self.categories.create(data).await?;
        info!("Category {} created", category.category_id);
        Ok(category)
    }

    #[instrument(skip(self, data), fields(category_id = %category_id))]
    pub async fn update(
        &self,
        category_id: i32,
        data: &UpdateCategoryDTO,
    ) -> Result<&'static str, ServiceError> {
        debug!("Updating category");
        let mut category = self.categories.read(&category_id).await?.ok_or_else(|| {
            warn!("Category not found");
            ServiceError::NotFound("Category not found")
        })?;

        self.categories.update(&mut category, data).await?;

        info!("Category updated");
        Ok(CATEGORY_UPDATED)
    }

    #[instrument(skip(self), fields(category_id = %category_id))]
    pub async fn delete(&self, category_id: i32) -> Result<&'static str, ServiceError> {
        debug!("Deleting category");
        let category = self.categories.read(&category_id).await?.ok_or_else(|| {
            warn!("Category not found");
            ServiceError::NotFound("Category not found")
        })?;

        self.categories.delete(&category).await?;

        info!("Category deleted");
        Ok(CATEGORY_DELETED)
    }
}
