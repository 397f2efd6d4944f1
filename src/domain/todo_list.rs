//! Named grouping of items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Client-supplied fields for creating or fully replacing a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListIn {
    pub name: String,
    pub description: Option<String>,
}
