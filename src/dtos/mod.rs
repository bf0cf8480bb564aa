//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod asset;
pub mod asset_employee;
pub mod category;
pub mod department;
pub mod employee;

pub use asset::{AssetDTO, CreateAssetDTO, UpdateAssetDTO};
pub use asset_employee::AssetEmployeeDTO;
pub use category::{CreateCategoryDTO, UpdateCategoryDTO};
pub use department::{CreateDepartmentDTO, UpdateDepartmentDTO};
pub use employee::{CreateEmployeeDTO, EmployeeDTO, UpdateEmployeeDTO};
