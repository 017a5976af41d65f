//! Route definitions for the `/customers` resource.
//!
//! The static `/latest-id` and `/login` segments take precedence over the
//! `/{id}` capture in axum's router.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Routes mounted at `/customers`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::list).post(customer::create))
        .route("/latest-id", get(customer::latest_id))
        .route("/login", post(customer::login))
        .route(
            "/{id}",
            get(customer::get_by_id)
                .put(customer::update)
                .delete(customer::delete),
        )
        .route("/{id}/points", put(customer::update_points))
}
