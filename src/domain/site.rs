use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Construction site that materials are delivered to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub id: i32,
    /// Unique, case-insensitive site name.
    pub name: String,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new site.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSite {
    pub name: String,
    pub location: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewSite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Patch data applied when updating a site. A `None` location keeps the
/// stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSite {
    pub name: String,
    pub location: Option<String>,
    pub updated_at: NaiveDateTime,
}
