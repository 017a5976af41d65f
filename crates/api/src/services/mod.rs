//! Service layer.
//!
//! Thin delegation between handlers and repositories: each method forwards
//! to the matching repository and converts `sqlx::Error` into the uniform
//! [`crate::error::AppError::Database`] failure carrying the original cause.
//! Absence stays `Option`/`bool`; handlers decide the HTTP meaning.

pub mod book;
pub mod customer;
pub mod order;

pub use book::BookService;
pub use customer::CustomerService;
pub use order::OrderService;
