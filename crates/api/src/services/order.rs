//! Order service: forwards to [`OrderRepo`].

use bookstore_core::types::DbId;
use bookstore_db::models::order::{CreateOrder, Order, UpdateOrder};
use bookstore_db::repositories::OrderRepo;
use sqlx::PgPool;

use crate::error::AppResult;

pub struct OrderService;

impl OrderService {
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Order>> {
        Ok(OrderRepo::list(pool).await?)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<Order>> {
        Ok(OrderRepo::find_by_id(pool, id).await?)
    }

    pub async fn create(pool: &PgPool, input: &CreateOrder) -> AppResult<Order> {
        Ok(OrderRepo::create(pool, input).await?)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateOrder) -> AppResult<Option<Order>> {
        Ok(OrderRepo::update(pool, id, input).await?)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<bool> {
        Ok(OrderRepo::delete(pool, id).await?)
    }
}
