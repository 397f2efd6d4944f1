//! Pool creation and idempotent schema setup.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Path value selecting a private in-memory SQLite database.
pub const SQLITE_MEMORY: &str = ":memory:";

/// Connect to Postgres and create the schema if absent.
pub async fn init_pg(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;

    run_pg_migrations(&pool).await?;

    info!(max_connections, "Postgres database initialized");
    Ok(pool)
}

/// Open the SQLite database at `db_path` and create the schema if absent.
pub async fn init_sqlite(db_path: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqlitePoolOptions::new()
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }));

    let pool = if db_path == SQLITE_MEMORY {
        // Every connection to :memory: gets its own database, so keep exactly one alive.
        options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?
    } else {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }
        options
            .max_connections(max_connections)
            .connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await?
    };

    run_sqlite_migrations(&pool).await?;

    info!("SQLite database initialized at {}", db_path);
    Ok(pool)
}

async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    for statement in statements(include_str!("schema_postgres.sql")) {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Migrations completed successfully");
    Ok(())
}

async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    for statement in statements(include_str!("schema_sqlite.sql")) {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Migrations completed successfully");
    Ok(())
}

fn statements(schema_sql: &str) -> impl Iterator<Item = &str> {
    schema_sql
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.try_get(0)?;
    tracing::debug!(journal_mode = %journal_mode, "SQLite journal mode");

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_db_path(temp_dir: &TempDir) -> String {
        temp_dir
            .path()
            .join("nested")
            .join("test.db")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_schema_splits_into_statements() {
        let sqlite: Vec<_> = statements(include_str!("schema_sqlite.sql")).collect();
        let postgres: Vec<_> = statements(include_str!("schema_postgres.sql")).collect();
        assert_eq!(sqlite.len(), 3);
        assert_eq!(postgres.len(), 3);
        assert!(sqlite.iter().all(|s| s.starts_with("CREATE")));
    }

    #[tokio::test]
    async fn test_init_sqlite_creates_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_db_path(&temp_dir);

        let pool = init_sqlite(&db_path, 3).await.expect("init_sqlite failed");
        assert!(Path::new(&db_path).exists());

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let pool = init_sqlite(SQLITE_MEMORY, 1).await.expect("init_sqlite failed");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('items', 'todoLists') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("query failed");
        let names: Vec<_> = tables.into_iter().map(|t| t.0).collect();
        assert_eq!(names, vec!["items".to_string(), "todoLists".to_string()]);
    }

    #[tokio::test]
    async fn test_migrations_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_db_path(&temp_dir);
        let pool = init_sqlite(&db_path, 3).await.expect("init_sqlite failed");

        sqlx::query("INSERT INTO items (name) VALUES ('kept')")
            .execute(&pool)
            .await
            .expect("insert failed");

        run_sqlite_migrations(&pool)
            .await
            .expect("second migration run failed");
        pool.close().await;

        let pool = init_sqlite(&db_path, 3).await.expect("reopen failed");
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_state_check_constraint() {
        let pool = init_sqlite(SQLITE_MEMORY, 1).await.expect("init_sqlite failed");

        let rejected = sqlx::query("INSERT INTO items (name, state) VALUES ('x', 'blocked')")
            .execute(&pool)
            .await;
        assert!(rejected.is_err());

        sqlx::query("INSERT INTO items (name, state) VALUES ('x', NULL)")
            .execute(&pool)
            .await
            .expect("null state should be accepted");
    }
}
