//! Customer service: forwards to [`CustomerRepo`].
//!
//! The only business logic in the whole backend lives here: the login
//! lookup, the latest-id aggregate, and the points overwrite.

use bookstore_core::types::DbId;
use bookstore_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use bookstore_db::repositories::CustomerRepo;
use sqlx::PgPool;

use crate::error::AppResult;

pub struct CustomerService;

impl CustomerService {
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Customer>> {
        Ok(CustomerRepo::list(pool).await?)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_id(pool, id).await?)
    }

    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> AppResult<Customer> {
        Ok(CustomerRepo::create(pool, input).await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> AppResult<Option<Customer>> {
        Ok(CustomerRepo::update(pool, id, input).await?)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<bool> {
        Ok(CustomerRepo::delete(pool, id).await?)
    }

    /// Look up a customer whose name and email both match exactly.
    ///
    /// Returns `None` on no match; absence is not an error here because the
    /// login handler turns it into a 401 rather than a 404.
    pub async fn login_by_name_and_email(
        pool: &PgPool,
        name: &str,
        email: &str,
    ) -> AppResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_name_and_email(pool, name, email).await?)
    }

    /// Highest customer id in the store, or 0 when there are none.
    pub async fn latest_id(pool: &PgPool) -> AppResult<DbId> {
        Ok(CustomerRepo::latest_id(pool).await?)
    }

    /// Overwrite a customer's points balance with the supplied final value.
    /// No bounds checking, no delta semantics.
    pub async fn update_points(
        pool: &PgPool,
        id: DbId,
        points: i64,
    ) -> AppResult<Option<Customer>> {
        Ok(CustomerRepo::update_points(pool, id, points).await?)
    }
}
