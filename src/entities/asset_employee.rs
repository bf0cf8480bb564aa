//! AssetEmployee entity - Associazione molti-a-molti tra asset e dipendenti
//!
//! Non ha una chiave surrogata: la coppia (asset_id, employee_id) è la chiave primaria.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::FromRow)]
pub struct AssetEmployee {
    pub asset_id: i32,
    pub employee_id: i32,
}

impl AssetEmployee {
    pub fn new(asset_id: i32, employee_id: i32) -> Self {
        Self {
            asset_id,
            employee_id,
        }
    }

    /// Composite primary key of the row
    pub fn key(&self) -> (i32, i32) {
        (self.asset_id, self.employee_id)
    }
}
