//! Repository for the `customers` table.

use bookstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, points";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// The id comes from the caller, not a sequence; a duplicate id fails
    /// the primary-key constraint and surfaces as a store failure.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (id, name, email, points)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.points)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer whose name and email both match exactly
    /// (case-sensitivity is left to the store collation).
    pub async fn find_by_name_and_email(
        pool: &PgPool,
        name: &str,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE name = $1 AND email = $2");
        sqlx::query_as::<_, Customer>(&query)
            .bind(name)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all customers ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Highest customer id currently in the table, or 0 when empty.
    pub async fn latest_id(pool: &PgPool) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT COALESCE(MAX(id), 0) FROM customers")
            .fetch_one(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                points = COALESCE($4, points)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.points)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a customer's points balance with the supplied value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_points(
        pool: &PgPool,
        id: DbId,
        points: i64,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET points = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(points)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
