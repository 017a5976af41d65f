//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Absence is signalled with
//! `Option`/`bool`; `sqlx::Error` is reserved for genuine store failures.

pub mod book_repo;
pub mod customer_repo;
pub mod order_repo;

pub use book_repo::BookRepo;
pub use customer_repo::CustomerRepo;
pub use order_repo::OrderRepo;
