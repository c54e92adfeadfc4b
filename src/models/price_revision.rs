use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::price_revision::{
    NewPriceRevision as DomainNewPriceRevision, PriceRevision as DomainPriceRevision,
};
use crate::models::parse_amount;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::price_revision_logs,
    belongs_to(super::supplier_price::SupplierPrice, foreign_key = supplier_material_price_id)
)]
pub struct PriceRevision {
    pub id: i32,
    pub supplier_material_price_id: i32,
    pub old_price: Option<String>,
    pub new_price: String,
    pub old_effective_from_date: Option<NaiveDate>,
    pub new_effective_from_date: NaiveDate,
    pub old_effective_to_date: Option<NaiveDate>,
    pub new_effective_to_date: Option<NaiveDate>,
    pub old_is_active: Option<bool>,
    pub new_is_active: bool,
    pub change_timestamp: NaiveDateTime,
    pub changed_by_user: String,
    pub reason_for_change: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::price_revision_logs)]
pub struct NewPriceRevision<'a> {
    pub supplier_material_price_id: i32,
    pub old_price: Option<String>,
    pub new_price: String,
    pub old_effective_from_date: Option<NaiveDate>,
    pub new_effective_from_date: NaiveDate,
    pub old_effective_to_date: Option<NaiveDate>,
    pub new_effective_to_date: Option<NaiveDate>,
    pub old_is_active: Option<bool>,
    pub new_is_active: bool,
    pub change_timestamp: NaiveDateTime,
    pub changed_by_user: &'a str,
    pub reason_for_change: Option<&'a str>,
}

impl TryFrom<PriceRevision> for DomainPriceRevision {
    type Error = RepositoryError;

    fn try_from(value: PriceRevision) -> Result<Self, Self::Error> {
        let old_price = value
            .old_price
            .as_deref()
            .map(|amount| parse_amount("old_price", amount))
            .transpose()?;

        Ok(Self {
            id: value.id,
            supplier_material_price_id: value.supplier_material_price_id,
            old_price,
            new_price: parse_amount("new_price", &value.new_price)?,
            old_effective_from_date: value.old_effective_from_date,
            new_effective_from_date: value.new_effective_from_date,
            old_effective_to_date: value.old_effective_to_date,
            new_effective_to_date: value.new_effective_to_date,
            old_is_active: value.old_is_active,
            new_is_active: value.new_is_active,
            change_timestamp: value.change_timestamp,
            changed_by_user: value.changed_by_user,
            reason_for_change: value.reason_for_change,
        })
    }
}

impl<'a> From<&'a DomainNewPriceRevision> for NewPriceRevision<'a> {
    fn from(value: &'a DomainNewPriceRevision) -> Self {
        Self {
            supplier_material_price_id: value.supplier_material_price_id,
            old_price: value.old_price.map(|amount| amount.to_string()),
            new_price: value.new_price.to_string(),
            old_effective_from_date: value.old_effective_from_date,
            new_effective_from_date: value.new_effective_from_date,
            old_effective_to_date: value.old_effective_to_date,
            new_effective_to_date: value.new_effective_to_date,
            old_is_active: value.old_is_active,
            new_is_active: value.new_is_active,
            change_timestamp: value.change_timestamp,
            changed_by_user: value.changed_by_user.as_str(),
            reason_for_change: value.reason_for_change.as_deref(),
        }
    }
}
