use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Manufacturer or label a master material is sold under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: i32,
    /// Unique, case-insensitive brand name.
    pub name: String,
    pub description: Option<String>,
    /// Path or URL of the brand logo.
    pub brand_image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new brand.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
    pub brand_image_path: Option<String>,
    /// Timestamp captured when the brand payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewBrand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            brand_image_path: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_path(mut self, brand_image_path: impl Into<String>) -> Self {
        self.brand_image_path = Some(brand_image_path.into());
        self
    }
}

/// Patch data applied when updating a brand. Every field is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBrand {
    pub name: String,
    pub description: Option<String>,
    pub brand_image_path: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Replacement logo path; `None` clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBrandImage {
    pub brand_image_path: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list brands.
#[derive(Debug, Clone, Default)]
pub struct BrandListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
}

impl BrandListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
