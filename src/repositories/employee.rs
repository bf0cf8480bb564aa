//! EmployeeRepository - Repository per la gestione dei dipendenti

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateEmployeeDTO, UpdateEmployeeDTO};
use crate::entities::{Department, Employee};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

#[derive(sqlx::FromRow)]
struct EmployeeWithDepartmentRow {
    employee_id: i32,
    name: String,
    surname: String,
    tel: String,
    department_id: i32,
    department_name: String,
}

impl From<EmployeeWithDepartmentRow> for Employee {
    fn from(row: EmployeeWithDepartmentRow) -> Self {
        Self {
            employee_id: row.employee_id,
            name: row.name,
            surname: row.surname,
            tel: row.tel,
            department_id: row.department_id,
            department: Some(Department {
                department_id: row.department_id,
                name: row.department_name,
            }),
        }
    }
}

// EMPLOYEE REPOSITORY
pub struct EmployeeRepository {
    connection_pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<Employee> for EmployeeRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Employee>, Error> {
        debug!("Reading all employees with their department");
        let rows = sqlx::query_as::<_, EmployeeWithDepartmentRow>(
            r#"
            SELECT
                e.employee_id,
                e.name,
                e.surname,
                e.tel,
                e.department_id,
                d.name AS department_name
            FROM employees e
            INNER JOIN departments d ON d.department_id = e.department_id
            ORDER BY e.employee_id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}

impl Create<Employee, CreateEmployeeDTO> for EmployeeRepository {
    #[instrument(skip(self, data), fields(department_id = %data.department_id))]
    async fn create(&self, data: &CreateEmployeeDTO) -> Result<Employee, Error> {
        debug!("Creating new employee");
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, surname, tel, department_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.tel)
        .bind(data.department_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;

        info!("Employee created with id {}", new_id);

        Ok(Employee {
            employee_id: new_id,
            name: data.name.clone(),
            surname: data.surname.clone(),
            tel: data.tel.clone(),
            department_id: data.department_id,
            department: None,
        })
    }
}

impl Read<Employee, i32> for EmployeeRepository {
    #[instrument(skip(self), fields(employee_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Employee>, Error> {
        debug!("Reading employee by id");
        let row = sqlx::query_as::<_, EmployeeWithDepartmentRow>(
            r#"
            SELECT
                e.employee_id,
                e.name,
                e.surname,
                e.tel,
                e.department_id,
                d.name AS department_name
            FROM employees e
            INNER JOIN departments d ON d.department_id = e.department_id
            WHERE e.employee_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row.map(Employee::from))
    }
}

impl Update<Employee, UpdateEmployeeDTO> for EmployeeRepository {
    #[instrument(skip(self, existing, data), fields(employee_id = %existing.employee_id))]
    async fn update(&self, existing: &mut Employee, data: &UpdateEmployeeDTO) -> Result<(), Error> {
        debug!("Updating employee");
        if let Some(ref name) = data.name {
            existing.name = name.clone();
        }
        if let Some(ref surname) = data.surname {
            existing.surname = surname.clone();
        }
        if let Some(ref tel) = data.tel {
            existing.tel = tel.clone();
        }
        if let Some(department_id) = data.department_id {
            if department_id != existing.department_id {
                existing.department = None;
            }
            existing.department_id = department_id;
        }

        sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, surname = ?, tel = ?, department_id = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(&existing.name)
        .bind(&existing.surname)
        .bind(&existing.tel)
        .bind(existing.department_id)
        .bind(existing.employee_id)
        .execute(&self.connection_pool)
        .await?;

        info!("Employee updated successfully");
        Ok(())
    }
}

impl Delete<Employee> for EmployeeRepository {
    #[instrument(skip(self, item), fields(employee_id = %item.employee_id))]
    async fn delete(&self, item: &Employee) -> Result<(), Error> {
        debug!("Deleting employee");
        sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(item.employee_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Employee deleted successfully");
        Ok(())
    }
}
