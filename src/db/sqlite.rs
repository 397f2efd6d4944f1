//! SQLite-backed store.

todo_store!(
    /// Store over a SQLite connection pool.
    SqliteStore,
    sqlx::sqlite::SqlitePool,
    sqlx::sqlite::SqliteRow
);
