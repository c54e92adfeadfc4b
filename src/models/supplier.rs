use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub contact_person: Option<&'a str>,
    pub contact_number: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Optional columns are written as NULL when empty.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::suppliers, treat_none_as_null = true)]
pub struct UpdateSupplier<'a> {
    pub name: &'a str,
    pub contact_person: Option<&'a str>,
    pub contact_number: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Supplier> for DomainSupplier {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            contact_person: value.contact_person,
            contact_number: value.contact_number,
            email: value.email,
            address: value.address,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(value: &'a DomainNewSupplier) -> Self {
        Self {
            name: value.name.as_str(),
            contact_person: value.contact_person.as_deref(),
            contact_number: value.contact_number.as_deref(),
            email: value.email.as_deref(),
            address: value.address.as_deref(),
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateSupplier> for UpdateSupplier<'a> {
    fn from(value: &'a DomainUpdateSupplier) -> Self {
        Self {
            name: value.name.as_str(),
            contact_person: value.contact_person.as_deref(),
            contact_number: value.contact_number.as_deref(),
            email: value.email.as_deref(),
            address: value.address.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
