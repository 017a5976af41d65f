//! Customer entity model and DTOs.

use bookstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Customer {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub points: i64,
}

/// DTO for creating a new customer.
///
/// Unlike books and orders, the id is supplied by the caller: login and
/// points updates address customers by externally known ids.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCustomer {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub points: i64,
}

/// DTO for updating an existing customer. All fields are optional.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub points: Option<i64>,
}

/// Credential pair for `POST /customers/login`.
///
/// Not a security mechanism: a bare name+email row match, kept deliberately.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginCustomer {
    pub name: String,
    pub email: String,
}

/// Body for `PUT /customers/{id}/points`: the final points value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCustomerPoints {
    pub points: i64,
}
