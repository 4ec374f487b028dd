//! OpenAPI description of the `/todos` endpoints and a Swagger UI page.
//!
//! The document is derived from the `#[utoipa::path]` annotations on the
//! handlers. The UI page loads swagger-ui from a CDN and points it at
//! `/openapi.json`; nothing is bundled into the binary.

use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    handlers,
    model::{CreateTodo, Todo, UpdateTodo},
};

pub const DOCUMENT_PATH: &str = "/openapi.json";
pub const UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API", description = "CRUD over a single todos table"),
    paths(
        handlers::list_todos,
        handlers::get_todo,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(schemas(Todo, CreateTodo, UpdateTodo)),
    tags((name = "todos", description = "Todo management"))
)]
pub struct ApiDoc;

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Todo API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Add the document and UI routes to an already-built router.
pub fn with_docs(router: Router) -> Router {
    router.merge(
        Router::new()
            .route(DOCUMENT_PATH, get(document))
            .route(UI_PATH, get(ui)),
    )
}
