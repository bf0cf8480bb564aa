//! Category DTOs - Data Transfer Objects per categorie

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare una nuova categoria (senza category_id, assegnato dal DB)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCategoryDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// DTO per aggiornare una categoria (solo campi modificabili)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateCategoryDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}
