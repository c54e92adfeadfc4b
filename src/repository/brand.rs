use diesel::prelude::*;

use crate::domain::brand::{
    Brand as DomainBrand, BrandListQuery, NewBrand as DomainNewBrand,
    UpdateBrand as DomainUpdateBrand, UpdateBrandImage as DomainUpdateBrandImage,
};
use crate::models::brand::{
    Brand as DbBrand, NewBrand as DbNewBrand, UpdateBrand as DbUpdateBrand,
    UpdateBrandImage as DbUpdateBrandImage,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BrandReader, BrandWriter, DieselRepository};

impl BrandReader for DieselRepository {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let brand = brands::table
            .filter(brands::id.eq(id))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        Ok(brand.map(DomainBrand::from))
    }

    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let brand = brands::table
            .filter(brands::name.eq(name))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        Ok(brand.map(DomainBrand::from))
    }

    fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<Vec<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let mut items = brands::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            items = items.filter(brands::name.like(format!("%{term}%")));
        }

        let brands = items
            .order((brands::name.asc(), brands::id.asc()))
            .load::<DbBrand>(&mut conn)?;

        Ok(brands.into_iter().map(DomainBrand::from).collect())
    }
}

impl BrandWriter for DieselRepository {
    fn create_brand(&self, new_brand: &DomainNewBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(brands::table)
            .values(&DbNewBrand::from(new_brand))
            .get_result::<DbBrand>(&mut conn)?;

        Ok(created.into())
    }

    fn update_brand(&self, id: i32, updates: &DomainUpdateBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let updated = diesel::update(brands::table.filter(brands::id.eq(id)))
            .set(&DbUpdateBrand::from(updates))
            .get_result::<DbBrand>(&mut conn)?;

        Ok(updated.into())
    }

    fn update_brand_image(
        &self,
        id: i32,
        image: &DomainUpdateBrandImage,
    ) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let updated = diesel::update(brands::table.filter(brands::id.eq(id)))
            .set(&DbUpdateBrandImage::from(image))
            .get_result::<DbBrand>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_brand(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(brands::table.filter(brands::id.eq(id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
