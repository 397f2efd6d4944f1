//! Database module: connection pools, schema and the storage seam.
//!
//! This module provides:
//! - Pool initialization and idempotent schema creation for Postgres and SQLite
//! - The `TodoStore` trait used by the HTTP handlers
//! - `PgStore` and `SqliteStore`, both expanded from `todo_store!` over one set of statements

#[macro_use]
mod store;

pub mod migrations;
pub mod postgres;
mod sql;
pub mod sqlite;

pub use migrations::{init_pg, init_sqlite};
pub use postgres::PgStore;
pub use sqlite::SqliteStore;

use crate::config::{Config, DatabaseBackend};
use crate::domain::{Item, ItemIn, Page, TodoList, TodoListIn, TodoState};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Persistence operations behind the HTTP handlers.
///
/// Every method issues exactly one statement. `update_*` return `None` and
/// `delete_*` return `false` when no row has the given id.
#[async_trait]
pub trait TodoStore: Send + Sync + fmt::Debug {
    /// Items ordered by id, windowed by `page`.
    async fn list_items(&self, page: Page) -> Result<Vec<Item>, sqlx::Error>;
    async fn get_item(&self, id: i64) -> Result<Option<Item>, sqlx::Error>;
    /// Insert a new item; storage assigns the id.
    async fn create_item(&self, item: &ItemIn) -> Result<Item, sqlx::Error>;
    /// Replace every mutable field of the item.
    async fn update_item(&self, id: i64, item: &ItemIn) -> Result<Option<Item>, sqlx::Error>;
    async fn delete_item(&self, id: i64) -> Result<bool, sqlx::Error>;

    async fn list_lists(&self, page: Page) -> Result<Vec<TodoList>, sqlx::Error>;
    async fn get_list(&self, id: i64) -> Result<Option<TodoList>, sqlx::Error>;
    async fn create_list(&self, list: &TodoListIn) -> Result<TodoList, sqlx::Error>;
    async fn update_list(&self, id: i64, list: &TodoListIn)
        -> Result<Option<TodoList>, sqlx::Error>;
    /// Items referencing the list are left as they are.
    async fn delete_list(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Round trip to the database.
    async fn ping(&self) -> Result<(), sqlx::Error>;
    /// Release all pooled connections.
    async fn close(&self);
}

/// Open the configured backend and ensure the schema exists.
pub async fn connect(config: &Config) -> Result<Arc<dyn TodoStore>, sqlx::Error> {
    match config.database_backend {
        DatabaseBackend::Postgres => {
            info!(
                host = %config.postgres.host,
                port = config.postgres.port,
                database = %config.postgres.database,
                "Connecting to Postgres"
            );
            let pool = init_pg(&config.postgres.connection_url(), config.max_connections).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        DatabaseBackend::Sqlite => {
            let pool = init_sqlite(&config.database_path, config.max_connections).await?;
            Ok(Arc::new(SqliteStore::new(pool)))
        }
    }
}

/// Decode the stored `state` column, dropping values outside the enum.
pub(crate) fn parse_state(id: i64, raw: Option<String>) -> Option<TodoState> {
    let raw = raw?;
    match raw.parse() {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(item_id = id, state = %raw, error = %e, "Ignoring unknown stored item state");
            None
        }
    }
}
