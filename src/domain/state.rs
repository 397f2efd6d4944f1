//! Item workflow state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Workflow state of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoState {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown todo state: {0}")]
pub struct TodoStateParseError(pub String);

impl TodoState {
    /// Storage representation, identical to the JSON one.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoState::Todo => "todo",
            TodoState::InProgress => "inprogress",
            TodoState::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TodoState::Done)
    }
}

impl FromStr for TodoState {
    type Err = TodoStateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TodoState::Todo),
            "inprogress" => Ok(TodoState::InProgress),
            "done" => Ok(TodoState::Done),
            other => Err(TodoStateParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for TodoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
