//! Handlers for the `/books` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::models::book::{Book, CreateBook, UpdateBook};

use crate::error::{AppError, AppResult};
use crate::services::BookService;
use crate::state::AppState;

/// POST /books
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses((status = 201, description = "Book created", body = Book))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = BookService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses((status = 200, description = "All books", body = [Book]))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookService::list_all(&state.pool).await?;
    Ok(Json(books))
}

/// GET /books/{id}
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = BookService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(book))
}

/// PUT /books/{id}
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = BookService::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(book))
}

/// DELETE /books/{id}
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BookService::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Book", id }))
    }
}
