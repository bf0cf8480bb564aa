use asset_tracker::core::AppState;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite fornito da `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Crea un TestServer per i test
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = asset_tracker::create_router(create_test_state(pool));
    TestServer::new(app).expect("Failed to create test server")
}
