//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i service, ognuno costruito sullo stesso pool di connessioni.

use crate::services::{
    AssetEmployeeService, AssetService, CategoryService, DepartmentService, EmployeeService,
};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Service per la gestione delle categorie
    pub category: CategoryService,

    /// Service per la gestione dei reparti
    pub department: DepartmentService,

    /// Service per la gestione degli asset
    pub asset: AssetService,

    /// Service per la gestione dei dipendenti
    pub employee: EmployeeService,

    /// Service per le assegnazioni asset-dipendente
    pub asset_employee: AssetEmployeeService,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i service
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            category: CategoryService::new(pool.clone()),
            department: DepartmentService::new(pool.clone()),
            asset: AssetService::new(pool.clone()),
            employee: EmployeeService::new(pool.clone()),
            asset_employee: AssetEmployeeService::new(pool),
        }
    }
}
