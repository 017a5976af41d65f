//! Book service: forwards to [`BookRepo`].

use bookstore_core::types::DbId;
use bookstore_db::models::book::{Book, CreateBook, UpdateBook};
use bookstore_db::repositories::BookRepo;
use sqlx::PgPool;

use crate::error::AppResult;

pub struct BookService;

impl BookService {
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Book>> {
        Ok(BookRepo::list(pool).await?)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<Book>> {
        Ok(BookRepo::find_by_id(pool, id).await?)
    }

    pub async fn create(pool: &PgPool, input: &CreateBook) -> AppResult<Book> {
        Ok(BookRepo::create(pool, input).await?)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateBook) -> AppResult<Option<Book>> {
        Ok(BookRepo::update(pool, id, input).await?)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<bool> {
        Ok(BookRepo::delete(pool, id).await?)
    }
}
