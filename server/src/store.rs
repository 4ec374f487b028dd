//! Data access for the `Todos` table.
//!
//! # Design
//! Every operation borrows the request's scoped connection rather than the
//! pool, so a request never touches more than one connection. All caller
//! values travel as bound parameters. `CreatedAt` is stamped by the store
//! itself, never by this process.

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqliteConnection, SqlitePool,
};

use crate::model::Todo;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS Todos (
        Id        INTEGER PRIMARY KEY AUTOINCREMENT,
        Title     TEXT    NOT NULL CHECK (length(Title) BETWEEN 1 AND 200),
        IsDone    BOOLEAN NOT NULL DEFAULT 0,
        CreatedAt TEXT    NOT NULL
    )
"#;

/// Open a pool for `database_url`.
///
/// In-memory databases live and die with their connection, so they get a
/// single connection that is never reaped.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool.connect_with(options).await
}

/// Create the `Todos` table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    tracing::info!("todos table ready");
    Ok(())
}

pub async fn ping(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}

/// All rows, newest first. Ties on `CreatedAt` fall back to the higher id.
pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT Id, Title, IsDone, CreatedAt FROM Todos ORDER BY CreatedAt DESC, Id DESC",
    )
    .fetch_all(&mut *conn)
    .await
}

pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>("SELECT Id, Title, IsDone, CreatedAt FROM Todos WHERE Id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Insert a new, not-done todo and read it back.
pub async fn insert(conn: &mut SqliteConnection, title: &str) -> Result<Todo, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO Todos (Title, IsDone, CreatedAt)
        VALUES (?, 0, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        RETURNING Id
        "#,
    )
    .bind(title)
    .fetch_one(&mut *conn)
    .await?;

    sqlx::query_as::<_, Todo>("SELECT Id, Title, IsDone, CreatedAt FROM Todos WHERE Id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await
}

/// Overwrite `Title` and `IsDone` in one statement. `None` when no row matched.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    title: &str,
    is_done: bool,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        UPDATE Todos
        SET Title = ?, IsDone = ?
        WHERE Id = ?
        RETURNING Id, Title, IsDone, CreatedAt
        "#,
    )
    .bind(title)
    .bind(is_done)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

/// Returns whether a row was actually removed.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM Todos WHERE Id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
