//! Department service - Gestione reparti

use super::ServiceError;
use crate::dtos::{CreateDepartmentDTO, UpdateDepartmentDTO};
use crate::entities::Department;
use crate::repositories::{Create, Delete, DepartmentRepository, Read, ReadAll, Update};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

pub const DEPARTMENT_UPDATED: &str = "Updated";
pub const DEPARTMENT_DELETED: &str = "Deleted";

pub struct DepartmentService {
    departments: DepartmentRepository,
}

impl DepartmentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            departments: DepartmentRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Department>, ServiceError> {
        Ok(self.departments.read_all().await?)
    }

    pub async fn get_by_id(&self, department_id: i32) -> Result<Option<Department>, ServiceError> {
        Ok(self.departments.read(&department_id).await?)
    }

    #[instrument(skip(self, data))]
    pub async fn create(&self, data: &CreateDepartmentDTO) -> Result<Department, ServiceError> {
        debug!("Creating department");
        Ok(self.departments.create(data).await?)
    }

    #[instrument(skip(self, data), fields(department_id = %department_id))]
    pub async fn update(
        &self,
        department_id: i32,
        data: &UpdateDepartmentDTO,
    ) -> Result<&'static str, ServiceError> {
        debug!("Updating department");
        let mut department = self
            .departments
            .read(&department_id)
            .await?
            .ok_or_else(|| {
                warn!("Department not found");
                ServiceError::NotFound("Department not found")
            })?;

        self.departments.update(&mut department, data).await?;

        info!("Department updated");
        Ok(DEPARTMENT_UPDATED)
    }

    #[instrument(skip(self), fields(department_id = %department_id))]
    pub async fn delete(&self, department_id: i32) -> Result<&'static str, ServiceError> {
        debug!("Deleting department");
        let department = self
            .departments
            .read(&department_id)
            .await?
            .ok_or_else(|| {
                warn!("Department not found");
                ServiceError::NotFound("Department not found")
            })?;

        self.departments.delete(&department).await?;

        info!("Department deleted");
        Ok(DEPARTMENT_DELETED)
    }
}
