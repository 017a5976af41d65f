//! Handlers for the `/customers` resource, including the login and
//! points-overwrite endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::models::customer::{
    CreateCustomer, Customer, LoginCustomer, UpdateCustomer, UpdateCustomerPoints,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::services::CustomerService;
use crate::state::AppState;

/// Response payload for `GET /customers/latest-id`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LatestIdResponse {
    /// Highest customer id in the store; 0 when there are no customers.
    #[schema(value_type = i64)]
    pub latest_id: DbId,
}

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses((status = 201, description = "Customer created", body = Customer))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = CustomerService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses((status = 200, description = "All customers", body = [Customer]))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerService::list_all(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// PUT /customers/{id}
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerService::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// DELETE /customers/{id}
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CustomerService::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
    }
}

/// POST /customers/login
///
/// A mismatch is an authentication failure (401), never a 404.
#[utoipa::path(
    post,
    path = "/customers/login",
    tag = "customers",
    request_body = LoginCustomer,
    responses(
        (status = 200, description = "Credentials matched", body = Customer),
        (status = 401, description = "Invalid name or email")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginCustomer>,
) -> AppResult<Json<Customer>> {
    let customer =
        CustomerService::login_by_name_and_email(&state.pool, &input.name, &input.email)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("invalid name or email".into()))
            })?;
    Ok(Json(customer))
}

/// GET /customers/latest-id
#[utoipa::path(
    get,
    path = "/customers/latest-id",
    tag = "customers",
    responses((status = 200, description = "Highest customer id", body = LatestIdResponse))
)]
pub async fn latest_id(State(state): State<AppState>) -> AppResult<Json<LatestIdResponse>> {
    let latest_id = CustomerService::latest_id(&state.pool).await?;
    Ok(Json(LatestIdResponse { latest_id }))
}

/// PUT /customers/{id}/points
#[utoipa::path(
    put,
    path = "/customers/{id}/points",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = UpdateCustomerPoints,
    responses(
        (status = 200, description = "Points overwritten", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_points(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomerPoints>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerService::update_points(&state.pool, id, input.points)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}
