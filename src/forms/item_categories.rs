use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::item_category::{NewItemCategory, UpdateItemCategory};
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 100;

pub type ItemCategoryFormResult<T> = Result<T, ItemCategoryFormError>;

#[derive(Debug, Error)]
pub enum ItemCategoryFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Payload used to create or rename an item category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl ItemCategoryForm {
    fn sanitized_name(&self) -> ItemCategoryFormResult<String> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ItemCategoryFormError::EmptyName);
        }
        Ok(name)
    }

    pub fn into_new_item_category(self) -> ItemCategoryFormResult<NewItemCategory> {
        Ok(NewItemCategory::new(self.sanitized_name()?))
    }

    pub fn into_update_item_category(
        self,
        updated_at: NaiveDateTime,
    ) -> ItemCategoryFormResult<UpdateItemCategory> {
        Ok(UpdateItemCategory {
            name: self.sanitized_name()?,
            updated_at,
        })
    }
}
