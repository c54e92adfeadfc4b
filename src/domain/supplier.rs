use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain representation of a supplier that sells materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    /// Unique identifier of the supplier.
    pub id: i32,
    /// Unique, case-insensitive supplier name.
    pub name: String,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    /// Unique, case-insensitive email when present.
    pub email: Option<String>,
    pub address: Option<String>,
    /// Timestamp for when the supplier record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the supplier record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Timestamp captured when the supplier payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewSupplier {
    /// Build a supplier payload with only a name and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_person: None,
            contact_number: None,
            email: None,
            address: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_contact(
        mut self,
        contact_person: impl Into<String>,
        contact_number: impl Into<String>,
    ) -> Self {
        self.contact_person = Some(contact_person.into());
        self.contact_number = Some(contact_number.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Patch data applied when updating an existing supplier. Every field is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list suppliers.
#[derive(Debug, Clone, Default)]
pub struct SupplierListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
}

impl SupplierListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
