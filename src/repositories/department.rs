//! DepartmentRepository - Repository per la gestione dei reparti

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateDepartmentDTO, UpdateDepartmentDTO};
use crate::entities::Department;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// DEPARTMENT REPOSITORY
pub struct DepartmentRepository {
    connection_pool: SqlitePool,
}

impl DepartmentRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<Department> for DepartmentRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Department>, Error> {
        debug!("Reading all departments");
        let departments = sqlx::query_as::<_, Department>(
            "SELECT department_id, name FROM departments ORDER BY department_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(departments)
    }
}

impl Create<Department, CreateDepartmentDTO> for DepartmentRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateDepartmentDTO) -> Result<Department, Error> {
        debug!("Creating new department");
        let result = sqlx::query("INSERT INTO departments (name) VALUES (?)")
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid() as i32;

        info!("Department created with id {}", new_id);

        Ok(Department {
            department_id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Read<Department, i32> for DepartmentRepository {
    #[instrument(skip(self), fields(department_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Department>, Error> {
        debug!("Reading department by id");
        let department = sqlx::query_as::<_, Department>(
            "SELECT department_id, name FROM departments WHERE department_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(department)
    }
}

impl Update<Department, UpdateDepartmentDTO> for DepartmentRepository {
    #[instrument(skip(self, existing, data), fields(department_id = %existing.department_id))]
    async fn update(
        &self,
        existing: &mut Department,
        data: &UpdateDepartmentDTO,
    ) -> Result<(), Error> {
        debug!("Updating department");
        if let Some(ref name) = data.name {
            existing.name = name.clone();
        }

        sqlx::query("UPDATE departments SET name = ? WHERE department_id = ?")
            .bind(&existing.name)
            .bind(existing.department_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Department updated successfully");
        Ok(())
    }
}

impl Delete<Department> for DepartmentRepository {
    #[instrument(skip(self, item), fields(department_id = %item.department_id))]
    async fn delete(&self, item: &Department) -> Result<(), Error> {
        debug!("Deleting department");
        sqlx::query("DELETE FROM departments WHERE department_id = ?")
            .bind(item.department_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Department deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("departments")))]
    async fn test_read_all_departments(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DepartmentRepository::new(pool);

        let departments = repo.read_all().await?;

        assert_eq!(departments.len(), 3);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("departments")))]
    async fn test_read_missing_department(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DepartmentRepository::new(pool);

        assert!(repo.read(&99).await?.is_none());
        Ok(())
    }

    /// add -> read -> delete -> read restituisce: record, stesso record, nulla
    #[sqlx::test]
    async fn test_create_read_delete_round_trip(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DepartmentRepository::new(pool);

        let created = repo
            .create(&CreateDepartmentDTO {
                name: "New Department".to_string(),
            })
            .await?;
        let found = repo.read(&created.department_id).await?;
        assert_eq!(found.as_ref(), Some(&created));

        repo.delete(&created).await?;
        assert!(repo.read(&created.department_id).await?.is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("departments")))]
    async fn test_update_department_name(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DepartmentRepository::new(pool);
        let mut department = repo.read(&1).await?.unwrap();

        repo.update(
            &mut department,
            &UpdateDepartmentDTO {
                name: Some("Updated Department".to_string()),
            },
        )
        .await?;

        let stored = repo.read(&1).await?.unwrap();
        assert_eq!(stored.name, "Updated Department");
        Ok(())
    }
}
