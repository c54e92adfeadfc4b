use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::supplier_price::{
    NewSupplierPrice as DomainNewSupplierPrice, SupplierPrice as DomainSupplierPrice,
    UpdateSupplierPrice as DomainUpdateSupplierPrice,
};
use crate::models::parse_amount;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::supplier_material_prices,
    belongs_to(super::supplier::Supplier, foreign_key = supplier_id),
    belongs_to(super::master_material::MasterMaterial, foreign_key = master_material_id)
)]
pub struct SupplierPrice {
    pub id: i32,
    pub supplier_id: i32,
    pub master_material_id: i32,
    pub price: String,
    pub unit: String,
    pub effective_from_date: NaiveDate,
    pub effective_to_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::supplier_material_prices)]
pub struct NewSupplierPrice<'a> {
    pub supplier_id: i32,
    pub master_material_id: i32,
    pub price: String,
    pub unit: &'a str,
    pub effective_from_date: NaiveDate,
    pub effective_to_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// `None` fields are left untouched; `effective_to_date` is always written,
/// `Some(None)` clearing it.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::supplier_material_prices)]
pub struct UpdateSupplierPrice<'a> {
    pub price: String,
    pub unit: &'a str,
    pub effective_from_date: NaiveDate,
    pub effective_to_date: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::supplier_material_prices)]
pub struct DeactivateSupplierPrice {
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl DeactivateSupplierPrice {
    pub fn at(updated_at: NaiveDateTime) -> Self {
        Self {
            is_active: false,
            updated_at,
        }
    }
}

impl TryFrom<SupplierPrice> for DomainSupplierPrice {
    type Error = RepositoryError;

    fn try_from(value: SupplierPrice) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            supplier_id: value.supplier_id,
            master_material_id: value.master_material_id,
            price: parse_amount("price", &value.price)?,
            unit: value.unit,
            effective_from_date: value.effective_from_date,
            effective_to_date: value.effective_to_date,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewSupplierPrice> for NewSupplierPrice<'a> {
    fn from(value: &'a DomainNewSupplierPrice) -> Self {
        Self {
            supplier_id: value.supplier_id,
            master_material_id: value.master_material_id,
            price: value.price.to_string(),
            unit: value.unit.as_str(),
            effective_from_date: value.effective_from_date,
            effective_to_date: value.effective_to_date,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateSupplierPrice> for UpdateSupplierPrice<'a> {
    fn from(value: &'a DomainUpdateSupplierPrice) -> Self {
        Self {
            price: value.price.to_string(),
            unit: value.unit.as_str(),
            effective_from_date: value.effective_from_date,
            effective_to_date: Some(value.effective_to_date),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
