//! Integration tests per gli endpoints degli asset

mod common;

#[cfg(test)]
mod asset_tests {
    use super::common::create_test_server;
    use serde_json::json;
    use sqlx::SqlitePool;
    use std::future::IntoFuture;

    // ============================================================
    // Test per GET /assets
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_list_assets_with_categories(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/assets").await;

        response.assert_status_ok();
        let assets: Vec<serde_json::Value> = response.json();
        assert_eq!(assets.len(), 3);
        for asset in &assets {
            assert!(asset["category_name"].is_string(), "Ogni asset deve avere la sua categoria");
        }
        Ok(())
    }

    #[sqlx::test]
    async fn test_list_assets_empty(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/assets").await;

        response.assert_status_ok();
        let assets: Vec<serde_json::Value> = response.json();
        assert!(assets.is_empty());
        Ok(())
    }

    // ============================================================
    // Test per GET /assets/{asset_id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_get_asset_by_id(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.get("/assets/1").await;

        response.assert_status_ok();
        let asset: serde_json::Value = response.json();
        assert_eq!(asset["asset_id"], 1);
        assert_eq!(asset["name"], "Asset 1");
        assert_eq!(asset["category_name"], "Category 1");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_get_missing_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        server.get("/assets/99").await.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per POST /assets
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_create_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let body = json!({
            "name": "Test Asset",
            "serial_number": "12345",
            "category_id": 1
        });
        let response = server.post("/assets").json(&body).await;

        response.assert_status_ok();
        let asset: serde_json::Value = response.json();
        assert_eq!(asset["name"], "Test Asset");
        assert_eq!(asset["serial_number"], "12345");
        assert_eq!(asset["category_id"], 1);

        let id = asset["asset_id"].as_i64().unwrap();
        server.get(&format!("/assets/{}", id)).await.assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_create_asset_with_invalid_category(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let body = json!({
            "name": "Orphan",
            "serial_number": "0",
            "category_id": 99
        });
        let response = server.post("/assets").json(&body).await;

        response.assert_status_bad_request();
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "Invalid category id");

        let assets: Vec<serde_json::Value> = server.get("/assets").await.json();
        assert_eq!(assets.len(), 3);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories")))]
    async fn test_create_asset_with_empty_name(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let body = json!({
            "name": "",
            "serial_number": "1",
            "category_id": 1
        });

        server
            .post("/assets")
            .json(&body)
            .await
            .assert_status_bad_request();
        Ok(())
    }

    /// Creazioni concorrenti: ogni richiesta ottiene un id diverso
    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_concurrent_creates_get_distinct_ids(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let requests = (0..5).map(|i| {
            server
                .post("/assets")
                .json(&json!({
                    "name": format!("Asset concurrent {}", i),
                    "serial_number": format!("SN-{}", i),
                    "category_id": 2
                }))
                .into_future()
        });
        let responses = futures::future::join_all(requests).await;

        let mut ids: Vec<i64> = responses
            .iter()
            .map(|r| {
                r.assert_status_ok();
                r.json::<serde_json::Value>()["asset_id"].as_i64().unwrap()
            })
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        let assets: Vec<serde_json::Value> = server.get("/assets").await.json();
        assert_eq!(assets.len(), 8);
        Ok(())
    }

    // ============================================================
    // Test per PUT /assets/{asset_id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_update_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server
            .put("/assets/1")
            .json(&json!({ "name": "Updated Asset" }))
            .await;

        response.assert_status_ok();
        let message: String = response.json();
        assert_eq!(message, "Successfully update");

        let asset: serde_json::Value = server.get("/assets/1").await.json();
        assert_eq!(asset["name"], "Updated Asset");
        assert_eq!(asset["serial_number"], "76");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_update_missing_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        server
            .put("/assets/99")
            .json(&json!({ "name": "Updated Asset" }))
            .await
            .assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per DELETE /assets/{asset_id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_delete_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        let response = server.delete("/assets/1").await;

        response.assert_status_ok();
        let message: String = response.json();
        assert_eq!(message, "Successfully delete");
        server.get("/assets/1").await.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categories", "assets")))]
    async fn test_delete_missing_asset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(pool);

        server.delete("/assets/99").await.assert_status_not_found();
        Ok(())
    }
}
