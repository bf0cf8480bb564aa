//! Category entity - Entità categoria

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
}
