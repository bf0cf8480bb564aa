//! Employee entity - Entità dipendente

use super::department::Department;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Employee {
    pub employee_id: i32,
    pub name: String,
    pub surname: String,
    pub tel: String,
    pub department_id: i32,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}
