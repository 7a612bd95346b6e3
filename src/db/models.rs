//! Domain model for the todo store.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A todo item, in its persisted document shape.
///
/// `id` is `None` until the store assigns one at insertion; it is never
/// reassigned afterwards. `created_at` is stored as a BSON datetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub done: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Build a fresh item. New items always start not-done; the id is
    /// assigned by the store at insertion.
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            done: false,
            created_at,
        }
    }
}

/// Completion filter accepted by the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoneFilter {
    /// Match every item.
    #[default]
    All,
    /// Match items whose `done` field equals the given value.
    Only(bool),
}

impl std::str::FromStr for DoneFilter {
    type Err = String;

    /// Parse the `done` query parameter. An empty string means no filter;
    /// the truthy/falsy aliases are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(DoneFilter::All),
            "true" | "1" | "t" | "on" => Ok(DoneFilter::Only(true)),
            "false" | "0" | "f" | "off" => Ok(DoneFilter::Only(false)),
            _ => Err(format!("Invalid done filter: {}", s)),
        }
    }
}

impl DoneFilter {
    /// Whether the given item matches this filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            DoneFilter::All => true,
            DoneFilter::Only(done) => todo.done == *done,
        }
    }
}
