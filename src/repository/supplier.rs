use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier, SupplierListQuery,
    UpdateSupplier as DomainUpdateSupplier,
};
use crate::models::supplier::{
    NewSupplier as DbNewSupplier, Supplier as DbSupplier, UpdateSupplier as DbUpdateSupplier,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SupplierReader, SupplierWriter};

impl SupplierReader for DieselRepository {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let supplier = suppliers::table
            .filter(suppliers::id.eq(id))
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(DomainSupplier::from))
    }

    fn get_supplier_by_name(&self, name: &str) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        // `name` is declared COLLATE NOCASE.
        let supplier = suppliers::table
            .filter(suppliers::name.eq(name))
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(DomainSupplier::from))
    }

    fn get_supplier_by_email(&self, email: &str) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let supplier = suppliers::table
            .filter(suppliers::email.eq(email))
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(DomainSupplier::from))
    }

    fn list_suppliers(&self, query: SupplierListQuery) -> RepositoryResult<Vec<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let mut items = suppliers::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            items = items.filter(suppliers::name.like(format!("%{term}%")));
        }

        let suppliers = items
            .order((suppliers::name.asc(), suppliers::id.asc()))
            .load::<DbSupplier>(&mut conn)?;

        Ok(suppliers.into_iter().map(DomainSupplier::from).collect())
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(&self, new_supplier: &DomainNewSupplier) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let insertable = DbNewSupplier::from(new_supplier);

        let created = diesel::insert_into(suppliers::table)
            .values(&insertable)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier(
        &self,
        id: i32,
        updates: &DomainUpdateSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateSupplier::from(updates);

        let updated = diesel::update(suppliers::table.filter(suppliers::id.eq(id)))
            .set(&db_updates)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(suppliers::table.filter(suppliers::id.eq(id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
