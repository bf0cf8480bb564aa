//! CategoryRepository - Repository per la gestione delle categorie

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateCategoryDTO, UpdateCategoryDTO};
use crate::entities::Category;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// CATEGORY REPOSITORY
pub struct CategoryRepository {
    connection_pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<Category> for CategoryRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Category>, Error> {
        debug!("Reading all categories");
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories ORDER BY category_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} categories", categories.len());
        Ok(categories)
    }
}

impl Create<Category, CreateCategoryDTO> for CategoryRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateCategoryDTO) -> Result<Category, Error> {
        debug!("Creating new category");
        let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid() as i32;

        info!("Category created with id {}", new_id);

        Ok(Category {
            category_id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Read<Category, i32> for CategoryRepository {
    #[instrument(skip(self), fields(category_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Category>, Error> {
        debug!("Reading category by id");
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories WHERE category_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(category)
    }
}

impl Update<Category, UpdateCategoryDTO> for CategoryRepository {
    #[instrument(skip(self, existing, data), fields(category_id = %existing.category_id))]
    async fn update(&self, existing: &mut Category, data: &UpdateCategoryDTO) -> Result<(), Error> {
        debug!("Updating category");
        if let Some(ref name) = data.name {
            existing.name = name.clone();
        }

        sqlx::query("UPDATE categories SET name = ? WHERE category_id = ?")
            .bind(&existing.name)
            .bind(existing.category_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Category updated successfully");
        Ok(())
    }
}

impl Delete<Category> for CategoryRepository {
    #[instrument(skip(self, item), fields(category_id = %item.category_id))]
    async fn delete(&self, item: &Category) -> Result<(), Error> {
        debug!("Deleting category");
        sqlx::query("DELETE FROM categories WHERE category_id = ?")
            .bind(item.category_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Category deleted successfully");
        Ok(())
    }
}
