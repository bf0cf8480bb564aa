//! Asset entity - Entità asset aziendale

use super::category::Category;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Asset {
    pub asset_id: i32,
    pub name: String,
    pub serial_number: String,
    pub category_id: i32,
    // popolata solo dalle letture che fanno join con categories
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}
