//! Offset/limit paging parameters.

use serde::Deserialize;

pub const DEFAULT_TAKE: u32 = 20;

/// `skip`/`take` window over a table, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_take")]
    pub take: u32,
}

fn default_take() -> u32 {
    DEFAULT_TAKE
}

impl Page {
    pub fn new(skip: u32, take: u32) -> Self {
        Page { skip, take }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.take)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(0, DEFAULT_TAKE)
    }
}
