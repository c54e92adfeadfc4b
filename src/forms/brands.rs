use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::{NewBrand, UpdateBrand, UpdateBrandImage};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

const NAME_MAX_LEN: u64 = 100;
const IMAGE_PATH_MAX_LEN: u64 = 2048;

pub type BrandFormResult<T> = Result<T, BrandFormError>;

#[derive(Debug, Error)]
pub enum BrandFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("brand name cannot be empty")]
    EmptyName,
}

/// Payload used to create or replace a brand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrandForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(max = IMAGE_PATH_MAX_LEN))]
    #[serde(default)]
    pub brand_image_path: Option<String>,
}

/// Payload for `PATCH /brands/{id}/image-path`. A missing or blank path
/// clears the logo.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrandImageForm {
    #[validate(length(max = IMAGE_PATH_MAX_LEN))]
    #[serde(default, rename = "imagePath", alias = "image_path")]
    pub image_path: Option<String>,
}

struct BrandFields {
    name: String,
    description: Option<String>,
    brand_image_path: Option<String>,
}

impl BrandForm {
    fn sanitize(self) -> BrandFormResult<BrandFields> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(BrandFormError::EmptyName);
        }

        Ok(BrandFields {
            name,
            description: sanitize_optional_text(self.description.as_deref()),
            brand_image_path: trimmed_path(self.brand_image_path),
        })
    }

    pub fn into_new_brand(self) -> BrandFormResult<NewBrand> {
        let fields = self.sanitize()?;

        let mut brand = NewBrand::new(fields.name);
        brand.description = fields.description;
        brand.brand_image_path = fields.brand_image_path;

        Ok(brand)
    }

    pub fn into_update_brand(self, updated_at: NaiveDateTime) -> BrandFormResult<UpdateBrand> {
        let fields = self.sanitize()?;

        Ok(UpdateBrand {
            name: fields.name,
            description: fields.description,
            brand_image_path: fields.brand_image_path,
            updated_at,
        })
    }
}

impl BrandImageForm {
    pub fn into_update_brand_image(
        self,
        updated_at: NaiveDateTime,
    ) -> BrandFormResult<UpdateBrandImage> {
        self.validate()?;

        Ok(UpdateBrandImage {
            brand_image_path: trimmed_path(self.image_path),
            updated_at,
        })
    }
}

/// Paths keep inner whitespace; only the ends are trimmed.
fn trimmed_path(path: Option<String>) -> Option<String> {
    path.map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
}
