//! AssetRepository - Repository per la gestione degli asset

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateAssetDTO, UpdateAssetDTO};
use crate::entities::{Asset, Category};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

/// Riga della join assets-categories, convertita in `Asset` con categoria caricata
#[derive(sqlx::FromRow)]
struct AssetWithCategoryRow {
    asset_id: i32,
    name: String,
    serial_number: String,
    category_id: i32,
    category_name: String,
}

impl From<AssetWithCategoryRow> for Asset {
    fn from(row: AssetWithCategoryRow) -> Self {
        Self {
            asset_id: row.asset_id,
            name: row.name,
            serial_number: row.serial_number,
            category_id: row.category_id,
            category: Some(Category {
                category_id: row.category_id,
                name: row.category_name,
            }),
        }
    }
}

// ASSET REPOSITORY
pub struct AssetRepository {
    connection_pool: SqlitePool,
}

impl AssetRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Count all assets, used to check that failed writes leave the table untouched
    pub async fn count(&self) -> Result<i64, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count)
    }
}

impl ReadAll<Asset> for AssetRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Asset>, Error> {
        debug!("Reading all assets with their category");
        let rows = sqlx::query_as::<_, AssetWithCategoryRow>(
            r#"
            SELECT
                a.asset_id,
                a.name,
                a.serial_number,
                a.category_id,
                c.name AS category_name
            FROM assets a
            INNER JOIN categories c ON c.category_id = a.category_id
            ORDER BY a.asset_id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} assets", rows.len());
        Ok(rows.into_iter().map(Asset::from).collect())
    }
}

impl Create<Asset, CreateAssetDTO> for AssetRepository {
    #[instrument(skip(self, data), fields(category_id = %data.category_id))]
    async fn create(&self, data: &CreateAssetDTO) -> Result<Asset, Error> {
        debug!("Creating new asset");
        let result = sqlx::query(
            r#"
            INSERT INTO assets (name, serial_number, category_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(data.category_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;

        info!("Asset created with id {}", new_id);

        Ok(Asset {
            asset_id: new_id,
            name: data.name.clone(),
            serial_number: data.serial_number.clone(),
            category_id: data.category_id,
            category: None,
        })
    }
}

impl Read<Asset, i32> for AssetRepository {
    #[instrument(skip(self), fields(asset_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Asset>, Error> {
        debug!("Reading asset by id");
        let row = sqlx::query_as::<_, AssetWithCategoryRow>(
            r#"
            SELECT
                a.asset_id,
                a.name,
                a.serial_number,
                a.category_id,
                c.name AS category_name
            FROM assets a
            INNER JOIN categories c ON c.category_id = a.category_id
            WHERE a.asset_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row.map(Asset::from))
    }
}

impl Update<Asset, UpdateAssetDTO> for AssetRepository {
    #[instrument(skip(self, existing, data), fields(asset_id = %existing.asset_id))]
    async fn update(&self, existing: &mut Asset, data: &UpdateAssetDTO) -> Result<(), Error> {
        debug!("Updating asset");
        if let Some(ref name) = data.name {
            existing.name = name.clone();
        }
        if let Some(ref serial_number) = data.serial_number {
            existing.serial_number = serial_number.clone();
        }
        if let Some(category_id) = data.category_id {
            if category_id != existing.category_id {
                // la categoria caricata non corrisponde più
                existing.category = None;
            }
            existing.category_id = category_id;
        }

        sqlx::query(
            r#"
            UPDATE assets
            SET name = ?, serial_number = ?, category_id = ?
            WHERE asset_id = ?
            "#,
        )
        .bind(&existing.name)
        .bind(&existing.serial_number)
        .bind(existing.category_id)
        .bind(existing.asset_id)
        .execute(&self.connection_pool)
        .await?;

        info!("Asset updated successfully");
        Ok(())
    }
}

impl Delete<Asset> for AssetRepository {
    #[instrument(skip(self, item), fields(asset_id = %item.asset_id))]
    async fn delete(&self, item: &Asset) -> Result<(), Error> {
        debug!("Deleting asset");
        sqlx::query("DELETE FROM assets WHERE asset_id = ?")
            .bind(item.asset_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Asset deleted successfully");
        Ok(())
    }
}
