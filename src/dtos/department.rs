//! Department DTOs - Data Transfer Objects per reparti

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateDepartmentDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateDepartmentDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}
