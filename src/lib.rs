//! Asset tracker library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use core::{AppError, AppState, Config};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use handlers::root;

    Router::new()
        .route("/", get(root))
        .nest("/categories", configure_category_routes())
        .nest("/departments", configure_department_routes())
        .nest("/assets", configure_asset_routes())
        .nest("/employees", configure_employee_routes())
        .nest("/asset-employees", configure_asset_employee_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione delle categorie
fn configure_category_routes() -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{category_id}",
            get(get_category_by_id)
                .put(update_category)
                .delete(delete_category),
        )
}

/// Configura le routes per la gestione dei reparti
fn configure_department_routes() -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/{department_id}",
            get(get_department_by_id)
                .put(update_department)
                .delete(delete_department),
        )
}

/// Configura le routes per la gestione degli asset
fn configure_asset_routes() -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/", get(list_assets).post(create_asset))
        .route(
            "/{asset_id}",
            get(get_asset_by_id).put(update_asset).delete(delete_asset),
        )
}

/// Configura le routes per la gestione dei dipendenti
fn configure_employee_routes() -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{employee_id}",
            get(get_employee_by_id)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// Configura le routes per le assegnazioni asset-dipendente
fn configure_asset_employee_routes() -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/", get(list_asset_employees).post(create_asset_employee))
        .route("/employee/{employee_id}", get(get_asset_by_employee_id))
        .route(
            "/{asset_id}/{employee_id}",
            axum::routing::put(update_asset_employee).delete(delete_asset_employee),
        )
}
