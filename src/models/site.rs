use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::site::{
    NewSite as DomainNewSite, Site as DomainSite, UpdateSite as DomainUpdateSite,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sites)]
pub struct Site {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sites)]
pub struct NewSite<'a> {
    pub name: &'a str,
    pub location: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// `None` columns are skipped, so an absent location keeps its value.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sites)]
pub struct UpdateSite<'a> {
    pub name: &'a str,
    pub location: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Site> for DomainSite {
    fn from(value: Site) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSite> for NewSite<'a> {
    fn from(value: &'a DomainNewSite) -> Self {
        Self {
            name: value.name.as_str(),
            location: value.location.as_deref(),
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateSite> for UpdateSite<'a> {
    fn from(value: &'a DomainUpdateSite) -> Self {
        Self {
            name: value.name.as_str(),
            location: value.location.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
