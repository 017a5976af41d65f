//! Book entity model and DTOs.

use bookstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A book row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Book {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub title: String,
    pub writer: String,
    pub cover_image: String,
    pub price: f64,
    pub tags: String,
}

/// DTO for creating a new book. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub writer: String,
    pub cover_image: Option<String>,
    pub price: Option<f64>,
    pub tags: Option<String>,
}

/// DTO for updating an existing book. All fields are optional.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub writer: Option<String>,
    pub cover_image: Option<String>,
    pub price: Option<f64>,
    pub tags: Option<String>,
}
