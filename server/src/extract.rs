//! Typed request extraction.
//!
//! `TodoId` turns the `{id}` path segment into an integer and treats anything
//! else as a route miss. `JsonBody` is axum's `Json` with its rejections
//! folded into `ApiError`, so a malformed body is a 400. `DbConn` is the
//! request's scoped store connection: it is taken from the pool before the
//! handler runs and handed back when the extractor is dropped, whichever way
//! the handler returns.

use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
    Json,
};
use sqlx::{pool::PoolConnection, Sqlite};

use crate::{error::ApiError, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(%rejection, "todo id is not an integer");
                Err(ApiError::NotFound)
            }
        }
    }
}

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug)]
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(Self(conn))
    }
}
