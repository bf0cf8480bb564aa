//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Repositories never validate foreign keys: that is the job of the service layer.

/// Trait for reading every row of a table
///
/// # Type Parameters
/// * `Entity` - Type of the entities to read
pub trait ReadAll<Entity> {
    /// Reads all entities, with their parent entity loaded where the table has one
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All stored entities (empty if the table is empty)
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i32`, `(i32, i32)`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to read
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for updating an entity that has already been loaded
///
/// # Type Parameters
/// * `Entity` - Type of the entity to update
/// * `UpdateDTO` - DTO for updating (optional fields for partial updates)
pub trait Update<Entity, UpdateDTO> {
    /// Copies the fields present in `data` onto `existing` and persists the result
    ///
    /// # Arguments
    /// * `existing` - Entity as currently stored, modified in place
    /// * `data` - DTO containing the fields to update (only `Some(_)` fields are modified)
    ///
    /// # Returns
    /// * `Ok(())` - Update persisted, `existing` reflects the stored row
    /// * `Err(sqlx::Error)` - Error during update
    async fn update(&self, existing: &mut Entity, data: &UpdateDTO) -> Result<(), sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Entity` - Type of the entity to delete, identified by its primary key
pub trait Delete<Entity> {
    /// Deletes an entity from the database
    ///
    /// # Arguments
    /// * `item` - Entity to delete
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(sqlx::Error)` - Error during deletion
    async fn delete(&self, item: &Entity) -> Result<(), sqlx::Error>;
}
