//! HTTP service exposing CRUD over a single `Todos` table.
//!
//! # Overview
//! Five JSON endpoints under `/todos` plus `/health`, and optionally an
//! OpenAPI document with a Swagger UI page (`openapi::with_docs`). Each
//! request takes one pooled SQLite connection for its whole lifetime through
//! the `DbConn` extractor; nothing else is shared between requests.
//!
//! # Design
//! - `store` holds every SQL statement and knows nothing about HTTP.
//! - `handlers` validate first, then call `store`, then shape the response.
//! - `ApiError` is the only error handlers return; its `IntoResponse` impl is
//!   the single place status codes for failures are chosen.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod store;
pub mod telemetry;
pub mod validation;

use std::future::Future;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;

pub use error::{ApiError, ConfigError};
pub use model::{CreateTodo, Todo, UpdateTodo};

/// Immutable state shared by all requests. Cloning only clones the pool handle.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
