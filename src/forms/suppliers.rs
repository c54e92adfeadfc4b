use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::supplier::{NewSupplier, UpdateSupplier};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

const NAME_MAX_LEN: u64 = 255;
const CONTACT_NUMBER_MAX_LEN: u64 = 20;
const EMAIL_MAX_LEN: u64 = 255;

/// Result type returned by the supplier form helpers.
pub type SupplierFormResult<T> = Result<T, SupplierFormError>;

/// Errors that can occur while processing supplier payloads.
#[derive(Debug, Error)]
pub enum SupplierFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("supplier name cannot be empty")]
    EmptyName,
}

/// Payload used to create or replace a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SupplierForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[validate(length(max = CONTACT_NUMBER_MAX_LEN))]
    #[serde(default)]
    pub contact_number: Option<String>,
    #[validate(email, length(max = EMAIL_MAX_LEN))]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Sanitized supplier fields shared by create and update.
struct SupplierFields {
    name: String,
    contact_person: Option<String>,
    contact_number: Option<String>,
    email: Option<String>,
    address: Option<String>,
}

impl SupplierForm {
    fn sanitize(self) -> SupplierFormResult<SupplierFields> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(SupplierFormError::EmptyName);
        }

        Ok(SupplierFields {
            name,
            contact_person: sanitize_optional_text(self.contact_person.as_deref()),
            contact_number: sanitize_optional_text(self.contact_number.as_deref()),
            email: sanitize_optional_text(self.email.as_deref()),
            address: sanitize_optional_text(self.address.as_deref()),
        })
    }

    /// Validates and sanitizes the payload into a domain `NewSupplier`.
    pub fn into_new_supplier(self) -> SupplierFormResult<NewSupplier> {
        let fields = self.sanitize()?;

        let mut supplier = NewSupplier::new(fields.name);
        supplier.contact_person = fields.contact_person;
        supplier.contact_number = fields.contact_number;
        supplier.email = fields.email;
        supplier.address = fields.address;

        Ok(supplier)
    }

    /// Validates and sanitizes the payload into a full `UpdateSupplier` replacement.
    pub fn into_update_supplier(
        self,
        updated_at: NaiveDateTime,
    ) -> SupplierFormResult<UpdateSupplier> {
        let fields = self.sanitize()?;

        Ok(UpdateSupplier {
            name: fields.name,
            contact_person: fields.contact_person,
            contact_number: fields.contact_number,
            email: fields.email,
            address: fields.address,
            updated_at,
        })
    }
}
