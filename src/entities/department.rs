//! Department entity - Entità reparto

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Department {
    pub department_id: i32,
    pub name: String,
}
