//! AssetEmployeeRepository - Repository per le assegnazioni asset-dipendente
//!
//! La tabella è identificata dalla coppia (asset_id, employee_id): non esiste un id surrogato,
//! quindi "aggiornare" una riga significa cancellare la vecchia coppia e inserire la nuova.

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::AssetEmployeeDTO;
use crate::entities::AssetEmployee;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// ASSETEMPLOYEE REPOSITORY
pub struct AssetEmployeeRepository {
    connection_pool: SqlitePool,
}

impl AssetEmployeeRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// First assignment held by an employee (lowest asset_id), if any
    #[instrument(skip(self), fields(employee_id = %employee_id))]
    pub async fn find_by_employee_id(
        &self,
        employee_id: &i32,
    ) -> Result<Option<AssetEmployee>, Error> {
        debug!("Finding first assignment of employee");
        let assignment = sqlx::query_as::<_, AssetEmployee>(
            r#"
            SELECT asset_id, employee_id
            FROM asset_employees
            WHERE employee_id = ?
            ORDER BY asset_id
            LIMIT 1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(assignment)
    }

    /// All assignments held by an employee
    #[instrument(skip(self), fields(employee_id = %employee_id))]
    pub async fn find_many_by_employee_id(
        &self,
        employee_id: &i32,
    ) -> Result<Vec<AssetEmployee>, Error> {
        debug!("Finding all assignments of employee");
        let assignments = sqlx::query_as::<_, AssetEmployee>(
            r#"
            SELECT asset_id, employee_id
            FROM asset_employees
            WHERE employee_id = ?
            ORDER BY asset_id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(assignments)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM asset_employees")
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count)
    }
}

impl ReadAll<AssetEmployee> for AssetEmployeeRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<AssetEmployee>, Error> {
        debug!("Reading all asset assignments");
        let assignments = sqlx::query_as::<_, AssetEmployee>(
            "SELECT asset_id, employee_id FROM asset_employees ORDER BY asset_id, employee_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(assignments)
    }
}

impl Create<AssetEmployee, AssetEmployeeDTO> for AssetEmployeeRepository {
    #[instrument(skip(self, data), fields(asset_id = %data.asset_id, employee_id = %data.employee_id))]
    async fn create(&self, data: &AssetEmployeeDTO) -> Result<AssetEmployee, Error> {
        debug!("Creating asset assignment");
        sqlx::query("INSERT INTO asset_employees (asset_id, employee_id) VALUES (?, ?)")
            .bind(data.asset_id)
            .bind(data.employee_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Asset assignment created");
        Ok(AssetEmployee::from(*data))
    }
}

impl Read<AssetEmployee, (i32, i32)> for AssetEmployeeRepository {
    #[instrument(skip(self), fields(asset_id = %id.0, employee_id = %id.1))]
    async fn read(&self, id: &(i32, i32)) -> Result<Option<AssetEmployee>, Error> {
        debug!("Reading asset assignment by composite key");
        let assignment = sqlx::query_as::<_, AssetEmployee>(
            r#"
            SELECT asset_id, employee_id
            FROM asset_employees
            WHERE asset_id = ? AND employee_id = ?
            "#,
        )
        .bind(id.0)
        .bind(id.1)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(assignment)
    }
}

impl Update<AssetEmployee, AssetEmployeeDTO> for AssetEmployeeRepository {
    /// Replaces the pair: the old row is deleted and the new one inserted in one transaction
    #[instrument(skip(self, existing, data), fields(
        old_asset_id = %existing.asset_id,
        old_employee_id = %existing.employee_id,
        new_asset_id = %data.asset_id,
        new_employee_id = %data.employee_id
    ))]
    async fn update(
        &self,
        existing: &mut AssetEmployee,
        data: &AssetEmployeeDTO,
    ) -> Result<(), Error> {
        debug!("Replacing asset assignment");
        let mut tx = self.connection_pool.begin().await?;

        sqlx::query("DELETE FROM asset_employees WHERE asset_id = ? AND employee_id = ?")
            .bind(existing.asset_id)
            .bind(existing.employee_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO asset_employees (asset_id, employee_id) VALUES (?, ?)")
            .bind(data.asset_id)
            .bind(data.employee_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        *existing = AssetEmployee::from(*data);
        info!("Asset assignment replaced");
        Ok(())
    }
}

impl Delete<AssetEmployee> for AssetEmployeeRepository {
    #[instrument(skip(self, item), fields(asset_id = %item.asset_id, employee_id = %item.employee_id))]
    async fn delete(&self, item: &AssetEmployee) -> Result<(), Error> {
        debug!("Deleting asset assignment");
        sqlx::query("DELETE FROM asset_employees WHERE asset_id = ? AND employee_id = ?")
            .bind(item.asset_id)
            .bind(item.employee_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Asset assignment deleted");
        Ok(())
    }
}
