use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::brand::{
    Brand as DomainBrand, NewBrand as DomainNewBrand, UpdateBrand as DomainUpdateBrand,
    UpdateBrandImage as DomainUpdateBrandImage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brands)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub brand_image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::brands)]
pub struct NewBrand<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub brand_image_path: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::brands, treat_none_as_null = true)]
pub struct UpdateBrand<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub brand_image_path: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::brands, treat_none_as_null = true)]
pub struct UpdateBrandImage<'a> {
    pub brand_image_path: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Brand> for DomainBrand {
    fn from(value: Brand) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            brand_image_path: value.brand_image_path,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBrand> for NewBrand<'a> {
    fn from(value: &'a DomainNewBrand) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            brand_image_path: value.brand_image_path.as_deref(),
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateBrand> for UpdateBrand<'a> {
    fn from(value: &'a DomainUpdateBrand) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            brand_image_path: value.brand_image_path.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateBrandImage> for UpdateBrandImage<'a> {
    fn from(value: &'a DomainUpdateBrandImage) -> Self {
        Self {
            brand_image_path: value.brand_image_path.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
