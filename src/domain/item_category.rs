use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grouping used to classify master materials, e.g. "Raw Materials".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemCategory {
    /// Unique identifier of the category.
    pub id: i32,
    /// Unique, case-insensitive category name.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemCategory {
    pub name: String,
    /// Timestamp captured when the category payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewItemCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

/// Patch data applied when renaming a category.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemCategory {
    pub name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}
