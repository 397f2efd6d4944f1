//! To-do item and its write payload.

use crate::domain::TodoState;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// A persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub state: Option<TodoState>,
    pub due_date: Option<DateTime<Utc>>,
    /// Set when the item is written with state `done`, cleared otherwise.
    pub completed_date: Option<DateTime<Utc>>,
    pub created_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
    /// Owning list. Not checked against `todoLists`.
    pub list_id: Option<i64>,
}

/// Client-supplied fields for creating or fully replacing an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIn {
    pub name: String,
    pub description: Option<String>,
    pub state: Option<TodoState>,
    /// RFC 3339, or a naive ISO 8601 timestamp taken as UTC.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: Option<i64>,
}

impl ItemIn {
    /// Completion timestamp to persist for a write happening at `now`.
    pub fn completed_date(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.state.filter(TodoState::is_done).map(|_| now)
    }
}

/// Parse a client timestamp. Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            raw.parse::<NaiveDateTime>()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e))),
        None => Ok(None),
    }
}
