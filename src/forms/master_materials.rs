use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::master_material::{NewMasterMaterial, UpdateMasterMaterial};
use crate::domain::supplier_price::normalize_unit;
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

const CODE_MAX_LEN: u64 = 50;
const NAME_MAX_LEN: u64 = 255;
const UNIT_MAX_LEN: u64 = 20;

pub type MasterMaterialFormResult<T> = Result<T, MasterMaterialFormError>;

#[derive(Debug, Error)]
pub enum MasterMaterialFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("material name cannot be empty")]
    EmptyName,
    #[error("default unit cannot be empty")]
    EmptyUnit,
}

/// Payload used to create or replace a catalogue material.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MasterMaterialForm {
    /// Blank codes are stored as no code.
    #[validate(length(max = CODE_MAX_LEN))]
    #[serde(default)]
    pub material_code: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1, max = UNIT_MAX_LEN))]
    pub default_unit: String,
    #[validate(range(min = 1))]
    pub item_category_id: i32,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub brand_id: Option<i32>,
}

struct MasterMaterialFields {
    material_code: Option<String>,
    name: String,
    description: Option<String>,
    default_unit: String,
    item_category_id: i32,
    brand_id: Option<i32>,
}

impl MasterMaterialForm {
    fn sanitize(self) -> MasterMaterialFormResult<MasterMaterialFields> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(MasterMaterialFormError::EmptyName);
        }

        let default_unit = normalize_unit(&self.default_unit);
        if default_unit.is_empty() {
            return Err(MasterMaterialFormError::EmptyUnit);
        }

        Ok(MasterMaterialFields {
            material_code: sanitize_optional_text(self.material_code.as_deref()),
            name,
            description: sanitize_optional_text(self.description.as_deref()),
            default_unit,
            item_category_id: self.item_category_id,
            brand_id: self.brand_id,
        })
    }

    pub fn into_new_master_material(self) -> MasterMaterialFormResult<NewMasterMaterial> {
        let fields = self.sanitize()?;

        let mut material =
            NewMasterMaterial::new(fields.name, fields.default_unit, fields.item_category_id);
        material.material_code = fields.material_code;
        material.description = fields.description;
        material.brand_id = fields.brand_id;

        Ok(material)
    }

    pub fn into_update_master_material(
        self,
        updated_at: NaiveDateTime,
    ) -> MasterMaterialFormResult<UpdateMasterMaterial> {
        let fields = self.sanitize()?;

        Ok(UpdateMasterMaterial {
            material_code: fields.material_code,
            name: fields.name,
            description: fields.description,
            default_unit: fields.default_unit,
            item_category_id: fields.item_category_id,
            brand_id: fields.brand_id,
            updated_at,
        })
    }
}
