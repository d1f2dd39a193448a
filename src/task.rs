//! Task data structure.
//!
//! A task is nothing more than an integer id and a free-text label. The field
//! names on disk (`id`, `task`) are fixed so existing `todos.json` files keep loading.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(rename = "task")]
    pub text: String,
}

impl Task {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Task { id, text: text.into() }
    }
}

/// Listing form: `<id>. <text>`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.text)
    }
}
