//! Employee services - Gestione dipendenti con validazione del reparto

use super::ServiceError;
use crate::dtos::{CreateEmployeeDTO, UpdateEmployeeDTO};
use crate::entities::Employee;
use crate::repositories::{
    Create, Delete, DepartmentRepository, EmployeeRepository, Read, ReadAll, Update,
};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

pub const EMPLOYEE_UPDATED: &str = "Updated";
pub const EMPLOYEE_DELETED: &str = "Deleted";

pub struct EmployeeService {
    employees: EmployeeRepository,
    departments: DepartmentRepository,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            employees: EmployeeRepository::new(pool.clone()),
            departments: DepartmentRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.employees.read_all().await?)
    }

    pub async fn get_by_id(&self, employee_id: i32) -> Result<Option<Employee>, ServiceError> {
        Ok(self.employees.read(&employee_id).await?)
    }

    async fn ensure_department_exists(&self, department_id: i32) -> Result<(), ServiceError> {
        if self.departments.read(&department_id).await?.is_none() {
            warn!("Department {} does not exist", department_id);
            return Err(ServiceError::InvalidReference("Invalid department id"));
        }
        Ok(())
    }

    #[instrument(skip(self, data), fields(department_id = %data.department_id))]
    pub async fn create(&self, data: &CreateEmployeeDTO) -> Result<Employee, ServiceError> {
        debug!("Creating employee");
        self.ensure_department_exists(data.department_id).await?;

        let employee = self.employees.create(data).await?;

        info!("Employee {} created", employee.employee_id);
        Ok(employee)
    }

    #[instrument(skip(self, data), fields(employee_id = %employee_id))]
    pub async fn update(
        &self,
        employee_id: i32,
        data: &UpdateEmployeeDTO,
    ) -> Result<&'static str, ServiceError> {
        debug!("Updating employee");
        let mut employee = self.employees.read(&employee_id).await?.ok_or_else(|| {
            warn!("Employee not found");
            ServiceError::NotFound("Employee not found")
        })?;

        if let Some(department_id) = data.department_id {
            self.ensure_department_exists(department_id).await?;
        }

        self.employees.update(&mut employee, data).await?;

        info!("Employee updated");
        Ok(EMPLOYEE_UPDATED)
    }

    #[instrument(skip(self), fields(employee_id = %employee_id))]
    pub async fn delete(&self, employee_id: i32) -> Result<&'static str, ServiceError> {
        debug!("Deleting employee");
        let employee = self.employees.read(&employee_id).await?.ok_or_else(|| {
            warn!("Employee not found");
            ServiceError::NotFound("Employee not found")
        })?;

        self.employees.delete(&employee).await?;

        info!("Employee deleted");
        Ok(EMPLOYEE_DELETED)
    }
}
