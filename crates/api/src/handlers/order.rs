//! Handlers for the `/orders` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::models::order::{CreateOrder, Order, UpdateOrder};

use crate::error::{AppError, AppResult};
use crate::services::OrderService;
use crate::state::AppState;

/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrder,
    responses((status = 201, description = "Order created", body = Order))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = OrderService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses((status = 200, description = "All orders", body = [Order]))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderService::list_all(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Order>> {
    let order = OrderService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /orders/{id}
#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrder>,
) -> AppResult<Json<Order>> {
    let order = OrderService::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}

/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = OrderService::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))
    }
}
