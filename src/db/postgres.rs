//! PostgreSQL-backed store.

todo_store!(
    /// Store over a Postgres connection pool.
    PgStore,
    sqlx::postgres::PgPool,
    sqlx::postgres::PgRow
);
