//! AssetEmployee DTOs - Data Transfer Objects per le assegnazioni asset-dipendente

use crate::entities::AssetEmployee;
use serde::{Deserialize, Serialize};

/// Coppia (asset_id, employee_id) usata sia in creazione che in aggiornamento:
/// aggiornare un'assegnazione significa sostituirne la chiave.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AssetEmployeeDTO {
    pub asset_id: i32,
    pub employee_id: i32,
}

impl From<AssetEmployee> for AssetEmployeeDTO {
    fn from(value: AssetEmployee) -> Self {
        Self {
            asset_id: value.asset_id,
            employee_id: value.employee_id,
        }
    }
}

impl From<AssetEmployeeDTO> for AssetEmployee {
    fn from(value: AssetEmployeeDTO) -> Self {
        AssetEmployee::new(value.asset_id, value.employee_id)
    }
}
