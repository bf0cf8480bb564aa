//! Handlers module - Coordinatore per tutti gli handler HTTP
//!
//! Gli handler traducono gli esiti dei service in risposte HTTP: nessuna regola di business qui.

pub mod asset;
pub mod asset_employee;
pub mod category;
pub mod department;
pub mod employee;

// Re-exports per facilitare l'import
pub use asset::{create_asset, delete_asset, get_asset_by_id, list_assets, update_asset};
pub use asset_employee::{
    create_asset_employee, delete_asset_employee, get_asset_by_employee_id, list_asset_employees,
    update_asset_employee,
};
pub use category::{
    create_category, delete_category, get_category_by_id, list_categories, update_category,
};
pub use department::{
    create_department, delete_department, get_department_by_id, list_departments,
    update_department,
};
pub use employee::{
    create_employee, delete_employee, get_employee_by_id, list_employees, update_employee,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
