use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalogue entry for a material that suppliers can price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MasterMaterial {
    /// Unique identifier of the material.
    pub id: i32,
    /// Optional unique code used by purchasing, e.g. `CEM-OPC-50`.
    pub material_code: Option<String>,
    /// Unique, case-insensitive material name.
    pub name: String,
    pub description: Option<String>,
    /// Unit the material is usually bought in, e.g. `BAGS`.
    pub default_unit: String,
    /// Category the material belongs to.
    pub item_category_id: i32,
    /// Brand the material is sold under, if any.
    pub brand_id: Option<i32>,
    /// Timestamp for when the material record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the material record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new material.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMasterMaterial {
    pub material_code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub default_unit: String,
    pub item_category_id: i32,
    pub brand_id: Option<i32>,
    /// Timestamp captured when the material payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewMasterMaterial {
    /// Build a material payload without code or description.
    pub fn new(name: impl Into<String>, default_unit: impl Into<String>, item_category_id: i32) -> Self {
        Self {
            material_code: None,
            name: name.into(),
            description: None,
            default_unit: default_unit.into(),
            item_category_id,
            brand_id: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_code(mut self, material_code: impl Into<String>) -> Self {
        self.material_code = Some(material_code.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_brand(mut self, brand_id: i32) -> Self {
        self.brand_id = Some(brand_id);
        self
    }
}

/// Patch data applied when updating a material. Every field is replaced;
/// a `None` code or brand clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMasterMaterial {
    pub material_code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub default_unit: String,
    pub item_category_id: i32,
    pub brand_id: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list materials.
#[derive(Debug, Clone, Default)]
pub struct MasterMaterialListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
    /// Restrict the results to one category.
    pub item_category_id: Option<i32>,
    /// Restrict the results to one brand.
    pub brand_id: Option<i32>,
}

impl MasterMaterialListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, item_category_id: i32) -> Self {
        self.item_category_id = Some(item_category_id);
        self
    }

    pub fn brand(mut self, brand_id: i32) -> Self {
        self.brand_id = Some(brand_id);
        self
    }
}
