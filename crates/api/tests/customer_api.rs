//! HTTP-level integration tests for the `/customers` endpoints, including
//! login, latest-id and the points overwrite.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_ann(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/customers",
        serde_json::json!({"id": 1, "name": "Ann", "email": "a@x.com", "points": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_customer_echoes_caller_supplied_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/customers",
        serde_json::json!({"id": 7, "name": "Bob", "email": "b@x.com", "points": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Bob");
    assert_eq!(json["email"], "b@x.com");
    assert_eq!(json["points"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_then_points_overwrite(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/customers/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["points"], 10);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/customers/1/points",
        serde_json::json!({"points": 50}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/customers/1").await).await;
    assert_eq!(json["points"], 50);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn points_overwrite_on_missing_customer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/customers/404/points",
        serde_json::json!({"points": 50}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_matching_credentials_returns_customer(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/customers/login",
        serde_json::json!({"name": "Ann", "email": "a@x.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Ann");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_email_returns_401(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/customers/login",
        serde_json::json!({"name": "Ann", "email": "wrong@x.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_name_returns_401(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/customers/login",
        serde_json::json!({"name": "Bob", "email": "a@x.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_id_on_empty_store_is_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/customers/latest-id").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["latest_id"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_id_tracks_highest_customer(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/customers",
        serde_json::json!({"id": 3, "name": "A", "email": "a@x.com", "points": 0}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/customers",
        serde_json::json!({"id": 17, "name": "B", "email": "b@x.com", "points": 0}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/customers/latest-id").await).await;
    assert_eq!(json["latest_id"], 17);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_customer(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/customers/1",
        serde_json::json!({"email": "new@x.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "new@x.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_customer_returns_204_then_404(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/customers/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/customers/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_customer_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/customers/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_customers(pool: PgPool) {
    create_ann(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/customers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
