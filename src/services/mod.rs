//! Services module - Regole di business sopra i repository
//!
//! Ogni service possiede i repository di cui ha bisogno e verifica esistenza e validità dei
//! riferimenti prima di qualsiasi scrittura. Nessuno stato viene mantenuto tra una chiamata e l'altra.

pub mod asset;
pub mod asset_employee;
pub mod category;
pub mod department;
pub mod employee;
pub mod error;

// Re-exports per facilitare l'import
pub use asset::AssetService;
pub use asset_employee::AssetEmployeeService;
pub use category::CategoryService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use error::ServiceError;
