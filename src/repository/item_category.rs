use diesel::prelude::*;

use crate::domain::item_category::{
    ItemCategory as DomainItemCategory, NewItemCategory as DomainNewItemCategory,
    UpdateItemCategory as DomainUpdateItemCategory,
};
use crate::models::item_category::{
    ItemCategory as DbItemCategory, NewItemCategory as DbNewItemCategory,
    UpdateItemCategory as DbUpdateItemCategory,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ItemCategoryReader, ItemCategoryWriter};

impl ItemCategoryReader for DieselRepository {
    fn get_item_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainItemCategory>> {
        use crate::schema::item_categories;

        let mut conn = self.conn()?;

        let category = item_categories::table
            .filter(item_categories::id.eq(id))
            .first::<DbItemCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainItemCategory::from))
    }

    fn get_item_category_by_name(
        &self,
        name: &str,
    ) -> RepositoryResult<Option<DomainItemCategory>> {
        use crate::schema::item_categories;

        let mut conn = self.conn()?;

        let category = item_categories::table
            .filter(item_categories::name.eq(name))
            .first::<DbItemCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainItemCategory::from))
    }

    fn list_item_categories(&self) -> RepositoryResult<Vec<DomainItemCategory>> {
        use crate::schema::item_categories;

        let mut conn = self.conn()?;

        let categories = item_categories::table
            .order(item_categories::name.asc())
            .load::<DbItemCategory>(&mut conn)?;

        Ok(categories.into_iter().map(DomainItemCategory::from).collect())
    }
}

impl ItemCategoryWriter for DieselRepository {
    fn create_item_category(
        &self,
        new_category: &DomainNewItemCategory,
    ) -> RepositoryResult<DomainItemCategory> {
        use crate::schema::item_categories;

        let mut conn = self.conn()?;

        let insertable = DbNewItemCategory::from(new_category);

        let created = diesel::insert_into(item_categories::table)
            .values(&insertable)
            .get_result::<DbItemCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_item_category(
        &self,
        id: i32,
        updates: &DomainUpdateItemCategory,
    ) -> RepositoryResult<DomainItemCategory> {
        use crate::schema::item_categories;

        let mut conn = self.conn()?;

        let updated = diesel::update(item_categories::table.filter(item_categories::id.eq(id)))
            .set(&DbUpdateItemCategory::from(updates))
            .get_result::<DbItemCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_item_category(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::item_categories;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(item_categories::table.filter(item_categories::id.eq(id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
