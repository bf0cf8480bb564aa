//! Asset services - Gestione asset con validazione della categoria

use super::ServiceError;
use crate::dtos::{CreateAssetDTO, UpdateAssetDTO};
use crate::entities::Asset;
use crate::repositories::{AssetRepository, CategoryRepository, Create, Delete, Read, ReadAll, Update};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

pub const ASSET_UPDATED: &str = "Successfully update";
pub const ASSET_DELETED: &str = "Successfully delete";

pub struct AssetService {
    assets: AssetRepository,
    categories: CategoryRepository,
}

impl AssetService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            assets: AssetRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Asset>, ServiceError> {
        Ok(self.assets.read_all().await?)
    }

    pub async fn get_by_id(&self, asset_id: i32) -> Result<Option<Asset>, ServiceError> {
        Ok(self.assets.read(&asset_id).await?)
    }

    /// Fails with `InvalidReference` when the category does not exist
    async fn ensure_category_exists(&self, category_id: i32) -> Result<(), ServiceError> {
        if self.categories.read(&category_id).await?.is_none() {
            warn!("Category {} does not exist", category_id);
            return Err(ServiceError::InvalidReference("Invalid category id"));
        }
        Ok(())
    }

    #[instrument(skip(self, data), fields(category_id = %data.category_id))]
    pub async fn create(&self, data: &CreateAssetDTO) -> Result<Asset, ServiceError> {
        debug!("Creating asset");
        // 1. Verificare che la categoria esista (fail-fast, nessuna scrittura)
        // 2. Salvare l'asset, l'id viene assegnato dal database
        self.ensure_category_exists(data.category_id).await?;

        let asset = self.assets.create(data).await?;

        info!("Asset {} created", asset.asset_id);
        Ok(asset)
    }

    #[instrument(skip(self, data), fields(asset_id = %asset_id))]
    pub async fn update(
        &self,
        asset_id: i32,
        data: &UpdateAssetDTO,
    ) -> Result<&'static str, ServiceError> {
        debug!("Updating asset");
        // 1. Recuperare l'asset corrente, se non esiste NOT FOUND
        // 2. Se il payload cambia categoria, verificare che la nuova esista
        // 3. Copiare i campi presenti nel payload e salvare
        let mut asset = self.assets.read(&asset_id).await?.ok_or_else(|| {
            warn!("Asset not found");
            ServiceError::NotFound("Asset not found")
        })?;

        if let Some(category_id) = data.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        self.assets.update(&mut asset, data).await?;

        info!("Asset updated");
        Ok(ASSET_UPDATED)
    }

    #[instrument(skip(self), fields(asset_id = %asset_id))]
    pub async fn delete(&self, asset_id: i32) -> Result<&'static str, ServiceError> {
        debug!("Deleting asset");
        let asset = self.assets.read(&asset_id).await?.ok_or_else(|| {
            warn!("Asset not found");
            ServiceError::NotFound("Asset not found")
        })?;

        self.assets.delete(&asset).await?;

        info!("Asset deleted");
        Ok(ASSET_DELETED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    fn new_asset(category_id: i32) -> CreateAssetDTO {
        CreateAssetDTO {
            name: "ThinkPad X1".to_string(),
            serial_number: "PF-3K9Z".to_string(),
            category_id,
        }
    }

    /*------------------------------------------- */
    /* Unit tests: get_all / get_by_id            */
    /*------------------------------------------- */

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_get_all_assets(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        let assets = service.get_all().await.unwrap();

        assert_eq!(assets.len(), 3);
        assert!(assets.iter().all(|a| a.category.is_some()));
        Ok(())
    }

    #[sqlx::test]
    async fn test_get_all_empty(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        assert!(service.get_all().await.unwrap().is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_get_missing_asset_is_none(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        assert!(service.get_by_id(99).await.unwrap().is_none());
        Ok(())
    }

    /*------------------------------------------- */
    /* Unit tests: create                         */
    /*------------------------------------------- */

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_create_then_get_returns_same_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);
        let input = new_asset(2);

        let created = service.create(&input).await.unwrap();
        let stored = service.get_by_id(created.asset_id).await.unwrap().unwrap();

        assert_eq!(stored.name, input.name);
        assert_eq!(stored.serial_number, input.serial_number);
        assert_eq!(stored.category_id, input.category_id);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_create_with_unknown_category_leaves_table_unchanged(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let service = AssetService::new(pool.clone());
        let repo = AssetRepository::new(pool);
        let before = repo.count().await?;

        let result = service.create(&new_asset(99)).await;

        assert!(matches!(
            result,
            Err(ServiceError::InvalidReference("Invalid category id"))
        ));
        assert_eq!(repo.count().await?, before);
        Ok(())
    }

    /// Pool chiuso: l'errore di sqlx arriva intatto al chiamante
    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_create_store_failure_propagates(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool.clone());
        pool.close().await;

        let result = service.create(&new_asset(1)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Store(sqlx::Error::PoolClosed))
        ));
        Ok(())
    }

    /*------------------------------------------- */
    /* Unit tests: update                         */
    /*------------------------------------------- */

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_update_changes_only_payload_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        let message = service
            .update(
                3,
                &UpdateAssetDTO {
                    serial_number: Some("SN-NEW".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(message, "Successfully update");
        let asset = service.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(asset.asset_id, 3);
        assert_eq!(asset.name, "Asset 3");
        assert_eq!(asset.serial_number, "SN-NEW");
        assert_eq!(asset.category_id, 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_update_missing_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        let result = service
            .update(
                99,
                &UpdateAssetDTO {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert!(service.get_by_id(99).await.unwrap().is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_update_with_unknown_category(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        let result = service
            .update(
                1,
                &UpdateAssetDTO {
                    name: Some("Renamed".to_string()),
                    category_id: Some(99),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidReference(_))));
        let asset = service.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(asset.name, "Asset 1");
        assert_eq!(asset.category_id, 1);
        Ok(())
    }

    /// Due aggiornamenti concorrenti dello stesso asset: vince l'ultimo che scrive
    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_concurrent_updates_last_writer_wins(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);
        let first = UpdateAssetDTO {
            name: Some("First".to_string()),
            ..Default::default()
        };
        let second = UpdateAssetDTO {
            name: Some("Second".to_string()),
            ..Default::default()
        };

        let (a, b) = tokio::join!(service.update(1, &first), service.update(1, &second));
        assert!(a.is_ok());
        assert!(b.is_ok());

        let asset = service.get_by_id(1).await.unwrap().unwrap();
        assert!(asset.name == "First" || asset.name == "Second");
        assert_eq!(service.get_all().await.unwrap().len(), 3);
        Ok(())
    }

    /*------------------------------------------- */
    /* Unit tests: delete                         */
    /*------------------------------------------- */

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_delete_removes_exactly_one_row(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool.clone());
        let categories = CategoryRepository::new(pool);

        let message = service.delete(2).await.unwrap();

        assert_eq!(message, "Successfully delete");
        assert!(service.get_by_id(2).await.unwrap().is_none());
        assert_eq!(service.get_all().await.unwrap().len(), 2);
        assert_eq!(categories.read_all().await?.len(), 3);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("categories", "assets")))]
    async fn test_delete_missing_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let service = AssetService::new(pool);

        assert!(matches!(
            service.delete(99).await,
            Err(ServiceError::NotFound(_))
        ));
        assert_eq!(service.get_all().await.unwrap().len(), 3);
        Ok(())
    }
}
