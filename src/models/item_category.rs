use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item_category::{
    ItemCategory as DomainItemCategory, NewItemCategory as DomainNewItemCategory,
    UpdateItemCategory as DomainUpdateItemCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::item_categories)]
pub struct ItemCategory {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::item_categories)]
pub struct NewItemCategory<'a> {
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::item_categories)]
pub struct UpdateItemCategory<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<ItemCategory> for DomainItemCategory {
    fn from(value: ItemCategory) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewItemCategory> for NewItemCategory<'a> {
    fn from(value: &'a DomainNewItemCategory) -> Self {
        Self {
            name: value.name.as_str(),
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateItemCategory> for UpdateItemCategory<'a> {
    fn from(value: &'a DomainUpdateItemCategory) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
