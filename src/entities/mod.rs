//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod asset;
pub mod asset_employee;
pub mod category;
pub mod department;
pub mod employee;

// Re-exports per facilitare l'import
pub use asset::Asset;
pub use asset_employee::AssetEmployee;
pub use category::Category;
pub use department::Department;
pub use employee::Employee;
