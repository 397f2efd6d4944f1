pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod server;

pub use config::Config;
pub use db::{connect, PgStore, SqliteStore, TodoStore};
pub use domain::{Item, ItemIn, Page, TodoList, TodoListIn, TodoState};
pub use error::AppError;
