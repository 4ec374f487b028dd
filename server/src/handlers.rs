use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    error::ApiError,
    extract::{DbConn, JsonBody, TodoId},
    model::{CreateTodo, Todo, UpdateTodo},
    store,
    validation::validate_title,
    AppState,
};

#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses((status = 200, description = "All todos, newest first", body = [Todo]))
)]
#[tracing::instrument(name = "list_todos", skip_all)]
pub async fn list_todos(DbConn(mut conn): DbConn) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store::list_all(&mut conn).await?;
    Ok(Json(todos))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = Todo),
        (status = 404, description = "No todo with this id")
    )
)]
#[tracing::instrument(name = "get_todo", skip_all, fields(id = id))]
pub async fn get_todo(
    TodoId(id): TodoId,
    DbConn(mut conn): DbConn,
) -> Result<Json<Todo>, ApiError> {
    store::get_by_id(&mut conn, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Created; Location points at the new todo", body = Todo,
            headers(("Location" = String, description = "/todos/{id}"))),
        (status = 400, description = "Invalid title", body = String, content_type = "text/plain")
    )
)]
#[tracing::instrument(name = "create_todo", skip_all)]
pub async fn create_todo(
    DbConn(mut conn): DbConn,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<impl IntoResponse, ApiError> {
    let title = validate_title(input.title.as_deref())?;

    let todo = store::insert(&mut conn, title).await?;
    tracing::info!(id = todo.id, "todo created");

    let location = format!("/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "The updated todo", body = Todo),
        (status = 400, description = "Invalid title", body = String, content_type = "text/plain"),
        (status = 404, description = "No todo with this id")
    )
)]
#[tracing::instrument(name = "update_todo", skip_all, fields(id = id))]
pub async fn update_todo(
    TodoId(id): TodoId,
    DbConn(mut conn): DbConn,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let title = validate_title(input.title.as_deref())?;

    store::update(&mut conn, id, title, input.is_done)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No todo with this id")
    )
)]
#[tracing::instrument(name = "delete_todo", skip_all, fields(id = id))]
pub async fn delete_todo(
    TodoId(id): TodoId,
    DbConn(mut conn): DbConn,
) -> Result<StatusCode, ApiError> {
    if store::delete(&mut conn, id).await? {
        tracing::info!("todo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Store reachability. Acquires its own connection so a dead pool reports 503
/// instead of the generic 500 the other handlers produce.
#[tracing::instrument(name = "health", skip_all)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let result = match state.pool.acquire().await {
        Ok(mut conn) => store::ping(&mut conn).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
