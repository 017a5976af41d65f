pub mod book;
pub mod customer;
pub mod health;
pub mod order;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// ```text
/// /books                    GET list, POST create
/// /books/{id}               GET, PUT, DELETE
///
/// /customers                GET list, POST create
/// /customers/latest-id      GET
/// /customers/login          POST
/// /customers/{id}           GET, PUT, DELETE
/// /customers/{id}/points    PUT
///
/// /orders                   GET list, POST create
/// /orders/{id}              GET, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/books", book::router())
        .nest("/customers", customer::router())
        .nest("/orders", order::router())
}
