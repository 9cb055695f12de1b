use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::DatabaseSettings;
use crate::error::Result;

const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL
)
"#;

const CREATE_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)";

/// Open a connection pool for `settings.url` and make sure the `items` table exists.
///
/// The database file is created when it does not exist yet.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(url = %settings.url, "Connected to database");

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Create the `items` table and its name index if they are missing.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    sqlx::query(CREATE_ITEMS_TABLE).execute(&mut *conn).await?;
    sqlx::query(CREATE_NAME_INDEX).execute(&mut *conn).await?;
    Ok(())
}
