//! HTTP-level integration tests for the `/orders` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_order_returns_201_with_store_assigned_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/orders",
        serde_json::json!({"customer_id": 1, "book_id": 1, "status": "pending"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["customer_id"], 1);
    assert_eq!(json["book_id"], 1);
    assert_eq!(json["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn order_lifecycle_create_delete_get(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/orders",
            serde_json::json!({"customer_id": 1, "book_id": 1, "status": "pending"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/orders/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/orders/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_order_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/orders/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_order_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/orders/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_order_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/orders",
            serde_json::json!({"customer_id": 1, "book_id": 1, "status": "pending"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/orders/{id}"),
        serde_json::json!({"status": "shipped"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "shipped");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn order_create_does_not_require_existing_refs(pool: PgPool) {
    // No customers or books exist; the insert still succeeds.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/orders",
        serde_json::json!({"customer_id": 987, "book_id": 654, "status": "pending"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_orders(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/orders",
        serde_json::json!({"customer_id": 1, "book_id": 1, "status": "pending"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/orders").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
