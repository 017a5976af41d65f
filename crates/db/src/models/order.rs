//! Order entity model and DTOs.

use bookstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An order row from the `orders` table.
///
/// `customer_id` and `book_id` are not validated against existing rows.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Order {
    #[schema(value_type = i64)]
    pub id: DbId,
    #[schema(value_type = i64)]
    pub customer_id: DbId,
    #[schema(value_type = i64)]
    pub book_id: DbId,
    pub status: String,
}

/// DTO for creating a new order. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrder {
    #[schema(value_type = i64)]
    pub customer_id: DbId,
    #[schema(value_type = i64)]
    pub book_id: DbId,
    pub status: String,
}

/// DTO for updating an existing order.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrder {
    pub status: Option<String>,
}
