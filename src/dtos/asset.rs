//! Asset DTOs - Data Transfer Objects per asset

use crate::entities::Asset;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug)]
pub struct AssetDTO {
    pub asset_id: i32,
    pub name: String,
    pub serial_number: String,
    pub category_id: i32,
    pub category_name: Option<String>, // presente solo se la categoria è stata caricata
}

impl From<Asset> for AssetDTO {
    fn from(value: Asset) -> Self {
        Self {
            asset_id: value.asset_id,
            name: value.name,
            serial_number: value.serial_number,
            category_id: value.category_id,
            category_name: value.category.map(|c| c.name),
        }
    }
}

/// DTO per creare un nuovo asset (senza asset_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAssetDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub serial_number: String,
    pub category_id: i32,
}

/// DTO per aggiornare un asset (solo i campi `Some(_)` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateAssetDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub serial_number: Option<String>,
    pub category_id: Option<i32>,
}
