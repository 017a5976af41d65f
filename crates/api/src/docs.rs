//! OpenAPI document served through Swagger UI at `/api-docs`.
//!
//! Presentational only: route registration stays in `routes/`; this module
//! collects the annotated handler paths and component schemas.

use bookstore_db::models::book::{Book, CreateBook, UpdateBook};
use bookstore_db::models::customer::{
    CreateCustomer, Customer, LoginCustomer, UpdateCustomer, UpdateCustomerPoints,
};
use bookstore_db::models::order::{CreateOrder, Order, UpdateOrder};
use utoipa::OpenApi;

use crate::handlers::customer::LatestIdResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        description = "CRUD over books, customers and orders"
    ),
    paths(
        crate::handlers::book::list,
        crate::handlers::book::get_by_id,
        crate::handlers::book::create,
        crate::handlers::book::update,
        crate::handlers::book::delete,
        crate::handlers::customer::list,
        crate::handlers::customer::get_by_id,
        crate::handlers::customer::create,
        crate::handlers::customer::update,
        crate::handlers::customer::delete,
        crate::handlers::customer::login,
        crate::handlers::customer::latest_id,
        crate::handlers::customer::update_points,
        crate::handlers::order::list,
        crate::handlers::order::get_by_id,
        crate::handlers::order::create,
        crate::handlers::order::update,
        crate::handlers::order::delete,
    ),
    components(schemas(
        Book,
        CreateBook,
        UpdateBook,
        Customer,
        CreateCustomer,
        UpdateCustomer,
        LoginCustomer,
        UpdateCustomerPoints,
        LatestIdResponse,
        Order,
        CreateOrder,
        UpdateOrder,
    )),
    tags(
        (name = "books", description = "API endpoints for managing books"),
        (name = "customers", description = "API endpoints for managing customers"),
        (name = "orders", description = "API endpoints for managing orders"),
    )
)]
pub struct ApiDoc;
