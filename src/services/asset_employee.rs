//! AssetEmployee services - Assegnazione degli asset ai dipendenti
//!
//! La chiave della riga è la coppia (asset_id, employee_id): la creazione rifiuta coppie
//! già presenti e l'aggiornamento sostituisce la coppia in un'unica transazione.

use super::ServiceError;
use crate::dtos::AssetEmployeeDTO;
use crate::entities::AssetEmployee;
use crate::repositories::{
    AssetEmployeeRepository, AssetRepository, Create, Delete, EmployeeRepository, Read, ReadAll,
    Update,
};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

pub const ASSIGNMENT_UPDATED: &str = "Asset updated.";
pub const ASSIGNMENT_DELETED: &str = "Asset deleted.";

pub struct AssetEmployeeService {
    assignments: AssetEmployeeRepository,
    assets: AssetRepository,
    employees: EmployeeRepository,
}

impl AssetEmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            assignments: AssetEmployeeRepository::new(pool.clone()),
            assets: AssetRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<AssetEmployee>, ServiceError> {
        Ok(self.assignments.read_all().await?)
    }

    pub async fn get_by_id(
        &self,
        key: (i32, i32),
    ) -> Result<Option<AssetEmployee>, ServiceError> {
        Ok(self.assignments.read(&key).await?)
    }

    pub async fn get_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<AssetEmployee>, ServiceError> {
        Ok(self.assignments.find_by_employee_id(&employee_id).await?)
    }

    pub async fn get_many_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Vec<AssetEmployee>, ServiceError> {
        Ok(self.assignments.find_many_by_employee_id(&employee_id).await?)
    }

    /// Both sides of the pair must exist, the asset is checked first
    async fn ensure_references_exist(&self, data: &AssetEmployeeDTO) -> Result<(), ServiceError> {
        if self.assets.read(&data.asset_id).await?.is_none() {
            warn!("Asset {} does not exist", data.asset_id);
            return Err(ServiceError::InvalidReference("Invalid asset id"));
        }
        if self.employees.read(&data.employee_id).await?.is_none() {
            warn!("Employee {} does not exist", data.employee_id);
            return Err(ServiceError::InvalidReference("Invalid employee id"));
        }
        Ok(())
    }

    #[instrument(skip(self, data), fields(asset_id = %data.asset_id, employee_id = %data.employee_id))]
    pub async fn create(&self, data: &AssetEmployeeDTO) -> Result<AssetEmployee, ServiceError> {
        debug!("Assigning asset to employee");
        // 1. Verificare che asset e dipendente esistano (fail-fast)
        // 2. Rifiutare la coppia se è già presente: la chiave composta è l'identità della riga
        // 3. Salvare l'assegnazione
        self.ensure_references_exist(data).await?;

        if self
            .assignments
            .read(&(data.asset_id, data.employee_id))
            .await?
            .is_some()
        {
            warn!("Asset already assigned to this employee");
            return Err(ServiceError::Conflict("Asset already assigned to employee"));
        }

        let assignment = self.assignments.create(data).await?;

        info!("Asset assigned to employee");
        Ok(assignment)
    }

    #[instrument(skip(self, data), fields(asset_id = %key.0, employee_id = %key.1))]
    pub async fn update(
        &self,
        key: (i32, i32),
        data: &AssetEmployeeDTO,
    ) -> Result<&'static str, ServiceError> {
        debug!("Updating asset assignment");
        // 1. Recuperare l'assegnazione corrente, se non esiste NOT FOUND
        // 2. Verificare che la nuova coppia referenzi righe esistenti
        // 3. Se la nuova coppia è diversa e già presente, CONFLICT
        // 4. Cancellare la vecchia coppia e inserire la nuova nella stessa transazione
        let mut assignment = self.assignments.read(&key).await?.ok_or_else(|| {
            warn!("Asset assignment not found");
            ServiceError::NotFound("Asset assignment not found")
        })?;

        self.ensure_references_exist(data).await?;

        let new_key = (data.asset_id, data.employee_id);
        if new_key != key && self.assignments.read(&new_key).await?.is_some() {
            warn!("Target assignment already exists");
            return Err(ServiceError::Conflict("Asset already assigned to employee"));
        }

        self.assignments.update(&mut assignment, data).await?;

        info!("Asset assignment updated");
        Ok(ASSIGNMENT_UPDATED)
    }

    #[instrument(skip(self), fields(asset_id = %key.0, employee_id = %key.1))]
    pub async fn delete(&self, key: (i32, i32)) -> Result<&'static str, ServiceError> {
        debug!("Deleting asset assignment");
        let assignment = self.assignments.read(&key).await?.ok_or_else(|| {
            warn!("Asset assignment not found");
            ServiceError::NotFound("Asset assignment not found")
        })?;

        self.assignments.delete(&assignment).await?;

        info!("Asset assignment deleted");
        Ok(ASSIGNMENT_DELETED)
    }
}
