use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::master_material::{
    MasterMaterial as DomainMasterMaterial, NewMasterMaterial as DomainNewMasterMaterial,
    UpdateMasterMaterial as DomainUpdateMasterMaterial,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::master_materials,
    belongs_to(super::item_category::ItemCategory, foreign_key = item_category_id),
    belongs_to(super::brand::Brand, foreign_key = brand_id)
)]
pub struct MasterMaterial {
    pub id: i32,
    pub material_code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub default_unit: String,
    pub item_category_id: i32,
    pub brand_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::master_materials)]
pub struct NewMasterMaterial<'a> {
    pub material_code: Option<&'a str>,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub default_unit: &'a str,
    pub item_category_id: i32,
    pub brand_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::master_materials, treat_none_as_null = true)]
pub struct UpdateMasterMaterial<'a> {
    pub material_code: Option<&'a str>,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub default_unit: &'a str,
    pub item_category_id: i32,
    pub brand_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<MasterMaterial> for DomainMasterMaterial {
    fn from(value: MasterMaterial) -> Self {
        Self {
            id: value.id,
            material_code: value.material_code,
            name: value.name,
            description: value.description,
            default_unit: value.default_unit,
            item_category_id: value.item_category_id,
            brand_id: value.brand_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMasterMaterial> for NewMasterMaterial<'a> {
    fn from(value: &'a DomainNewMasterMaterial) -> Self {
        Self {
            material_code: value.material_code.as_deref(),
            name: value.name.as_str(),
            description: value.description.as_deref(),
            default_unit: value.default_unit.as_str(),
            item_category_id: value.item_category_id,
            brand_id: value.brand_id,
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateMasterMaterial> for UpdateMasterMaterial<'a> {
    fn from(value: &'a DomainUpdateMasterMaterial) -> Self {
        Self {
            material_code: value.material_code.as_deref(),
            name: value.name.as_str(),
            description: value.description.as_deref(),
            default_unit: value.default_unit.as_str(),
            item_category_id: value.item_category_id,
            brand_id: value.brand_id,
            updated_at: value.updated_at,
        }
    }
}
