use diesel::prelude::*;

use crate::domain::site::{
    NewSite as DomainNewSite, Site as DomainSite, UpdateSite as DomainUpdateSite,
};
use crate::models::site::{NewSite as DbNewSite, Site as DbSite, UpdateSite as DbUpdateSite};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SiteReader, SiteWriter};

impl SiteReader for DieselRepository {
    fn get_site_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSite>> {
        use crate::schema::sites;

        let mut conn = self.conn()?;

        let site = sites::table
            .filter(sites::id.eq(id))
            .first::<DbSite>(&mut conn)
            .optional()?;

        Ok(site.map(DomainSite::from))
    }

    fn get_site_by_name(&self, name: &str) -> RepositoryResult<Option<DomainSite>> {
        use crate::schema::sites;

        let mut conn = self.conn()?;

        let site = sites::table
            .filter(sites::name.eq(name))
            .first::<DbSite>(&mut conn)
            .optional()?;

        Ok(site.map(DomainSite::from))
    }

    fn list_sites(&self) -> RepositoryResult<Vec<DomainSite>> {
        use crate::schema::sites;

        let mut conn = self.conn()?;

        let sites = sites::table
            .order((sites::name.asc(), sites::id.asc()))
            .load::<DbSite>(&mut conn)?;

        Ok(sites.into_iter().map(DomainSite::from).collect())
    }
}

impl SiteWriter for DieselRepository {
    fn create_site(&self, new_site: &DomainNewSite) -> RepositoryResult<DomainSite> {
        use crate::schema::sites;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(sites::table)
            .values(&DbNewSite::from(new_site))
            .get_result::<DbSite>(&mut conn)?;

        Ok(created.into())
    }

    fn update_site(&self, id: i32, updates: &DomainUpdateSite) -> RepositoryResult<DomainSite> {
        use crate::schema::sites;

        let mut conn = self.conn()?;

        let updated = diesel::update(sites::table.filter(sites::id.eq(id)))
            .set(&DbUpdateSite::from(updates))
            .get_result::<DbSite>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_site(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::sites;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(sites::table.filter(sites::id.eq(id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
