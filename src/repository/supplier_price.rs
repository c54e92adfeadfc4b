use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::master_material::MasterMaterial as DomainMasterMaterial;
use crate::domain::price_revision::{NewPriceRevision, PriceChange};
use crate::domain::supplier::Supplier as DomainSupplier;
use crate::domain::supplier_price::{
    ActivePriceQuery, NewSupplierPrice as DomainNewSupplierPrice, OverlapQuery,
    SupplierPrice as DomainSupplierPrice, SupplierPriceListQuery, SupplierPriceView,
    UpdateSupplierPrice as DomainUpdateSupplierPrice,
};
use crate::models::master_material::MasterMaterial as DbMasterMaterial;
use crate::models::supplier::Supplier as DbSupplier;
use crate::models::supplier_price::{
    DeactivateSupplierPrice, NewSupplierPrice as DbNewSupplierPrice,
    SupplierPrice as DbSupplierPrice, UpdateSupplierPrice as DbUpdateSupplierPrice,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::price_revision::append_revision;
use crate::repository::{DieselRepository, SupplierPriceReader, SupplierPriceWriter};

/// Row shape of a price joined with its supplier and material.
type PriceRow = (DbSupplierPrice, DbSupplier, DbMasterMaterial);

impl SupplierPriceReader for DieselRepository {
    fn get_supplier_price_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSupplierPrice>> {
        use crate::schema::supplier_material_prices;

        let mut conn = self.conn()?;

        let price = supplier_material_prices::table
            .filter(supplier_material_prices::id.eq(id))
            .first::<DbSupplierPrice>(&mut conn)
            .optional()?;

        price.map(DomainSupplierPrice::try_from).transpose()
    }

    fn get_supplier_price_view(&self, id: i32) -> RepositoryResult<Option<SupplierPriceView>> {
        let mut conn = self.conn()?;

        load_view(&mut conn, id)
    }

    fn list_supplier_prices(
        &self,
        query: SupplierPriceListQuery,
    ) -> RepositoryResult<Vec<SupplierPriceView>> {
        use crate::schema::{master_materials, supplier_material_prices, suppliers};

        let mut conn = self.conn()?;

        let mut items = supplier_material_prices::table
            .inner_join(suppliers::table.on(supplier_material_prices::supplier_id.eq(suppliers::id)))
            .inner_join(
                master_materials::table
                    .on(supplier_material_prices::master_material_id.eq(master_materials::id)),
            )
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(supplier_id) = query.supplier_id {
            items = items.filter(supplier_material_prices::supplier_id.eq(supplier_id));
        }

        if let Some(material_id) = query.master_material_id {
            items = items.filter(supplier_material_prices::master_material_id.eq(material_id));
        }

        let rows = items
            .select((
                DbSupplierPrice::as_select(),
                DbSupplier::as_select(),
                DbMasterMaterial::as_select(),
            ))
            .order((
                supplier_material_prices::effective_from_date.desc(),
                supplier_material_prices::id.desc(),
            ))
            .load::<PriceRow>(&mut conn)?;

        rows.into_iter().map(into_view).collect()
    }

    fn find_active_supplier_price(
        &self,
        query: &ActivePriceQuery,
    ) -> RepositoryResult<Option<SupplierPriceView>> {
        use crate::schema::{master_materials, supplier_material_prices, suppliers};

        let mut conn = self.conn()?;

        let row = supplier_material_prices::table
            .inner_join(suppliers::table.on(supplier_material_prices::supplier_id.eq(suppliers::id)))
            .inner_join(
                master_materials::table
                    .on(supplier_material_prices::master_material_id.eq(master_materials::id)),
            )
            .filter(supplier_material_prices::supplier_id.eq(query.supplier_id))
            .filter(supplier_material_prices::master_material_id.eq(query.master_material_id))
            .filter(supplier_material_prices::unit.eq(query.unit.as_str()))
            .filter(supplier_material_prices::is_active.eq(true))
            .filter(supplier_material_prices::effective_from_date.le(query.on_date))
            .filter(
                supplier_material_prices::effective_to_date
                    .is_null()
                    .or(supplier_material_prices::effective_to_date.ge(query.on_date)),
            )
            .select((
                DbSupplierPrice::as_select(),
                DbSupplier::as_select(),
                DbMasterMaterial::as_select(),
            ))
            .order((
                supplier_material_prices::effective_from_date.desc(),
                supplier_material_prices::created_at.desc(),
                supplier_material_prices::id.desc(),
            ))
            .first::<PriceRow>(&mut conn)
            .optional()?;

        row.map(into_view).transpose()
    }

    fn find_overlapping_supplier_prices(
        &self,
        query: &OverlapQuery,
    ) -> RepositoryResult<Vec<DomainSupplierPrice>> {
        let mut conn = self.conn()?;

        load_overlapping(&mut conn, query)
    }
}

impl SupplierPriceWriter for DieselRepository {
    fn create_supplier_price(
        &self,
        new_price: &DomainNewSupplierPrice,
        change: &PriceChange,
    ) -> RepositoryResult<SupplierPriceView> {
        use crate::schema::supplier_material_prices;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<SupplierPriceView, RepositoryError, _>(|conn| {
            ensure_no_overlap(conn, &new_price.overlap_query())?;

            let created = diesel::insert_into(supplier_material_prices::table)
                .values(&DbNewSupplierPrice::from(new_price))
                .get_result::<DbSupplierPrice>(conn)?;
            let created = DomainSupplierPrice::try_from(created)?;

            append_revision(conn, &NewPriceRevision::record(&created, change))?;

            require_view(conn, created.id)
        })
    }

    fn update_supplier_price(
        &self,
        id: i32,
        updates: &DomainUpdateSupplierPrice,
        change: &PriceChange,
    ) -> RepositoryResult<SupplierPriceView> {
        use crate::schema::supplier_material_prices;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<SupplierPriceView, RepositoryError, _>(|conn| {
            let existing = supplier_material_prices::table
                .filter(supplier_material_prices::id.eq(id))
                .first::<DbSupplierPrice>(conn)?;

            ensure_no_overlap(
                conn,
                &OverlapQuery {
                    supplier_id: existing.supplier_id,
                    master_material_id: existing.master_material_id,
                    unit: updates.unit.clone(),
                    window: updates.window(),
                    exclude_id: Some(id),
                },
            )?;

            let updated = diesel::update(
                supplier_material_prices::table.filter(supplier_material_prices::id.eq(id)),
            )
            .set(&DbUpdateSupplierPrice::from(updates))
            .get_result::<DbSupplierPrice>(conn)?;
            let updated = DomainSupplierPrice::try_from(updated)?;

            append_revision(conn, &NewPriceRevision::record(&updated, change))?;

            require_view(conn, updated.id)
        })
    }

    fn deactivate_supplier_price(
        &self,
        id: i32,
        change: &PriceChange,
    ) -> RepositoryResult<SupplierPriceView> {
        use crate::schema::supplier_material_prices;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<SupplierPriceView, RepositoryError, _>(|conn| {
            let deactivated = diesel::update(
                supplier_material_prices::table
                    .filter(supplier_material_prices::id.eq(id))
                    .filter(supplier_material_prices::is_active.eq(true)),
            )
            .set(&DeactivateSupplierPrice::at(change.changed_at))
            .get_result::<DbSupplierPrice>(conn)
            .optional()?;

            let Some(deactivated) = deactivated else {
                // Either missing or deactivated since the caller last read it.
                let exists = supplier_material_prices::table
                    .filter(supplier_material_prices::id.eq(id))
                    .count()
                    .get_result::<i64>(conn)?;
                return Err(if exists == 0 {
                    RepositoryError::NotFound
                } else {
                    RepositoryError::AlreadyInactive
                });
            };
            let deactivated = DomainSupplierPrice::try_from(deactivated)?;

            append_revision(conn, &NewPriceRevision::record(&deactivated, change))?;

            require_view(conn, deactivated.id)
        })
    }
}

/// Active records sharing the query's supplier, material and unit whose
/// windows intersect the query window.
fn load_overlapping(
    conn: &mut SqliteConnection,
    query: &OverlapQuery,
) -> RepositoryResult<Vec<DomainSupplierPrice>> {
    use crate::schema::supplier_material_prices;

    let mut candidates = supplier_material_prices::table
        .filter(supplier_material_prices::supplier_id.eq(query.supplier_id))
        .filter(supplier_material_prices::master_material_id.eq(query.master_material_id))
        .filter(supplier_material_prices::unit.eq(query.unit.as_str()))
        .filter(supplier_material_prices::is_active.eq(true))
        .into_boxed::<diesel::sqlite::Sqlite>();

    if let Some(exclude_id) = query.exclude_id {
        candidates = candidates.filter(supplier_material_prices::id.ne(exclude_id));
    }

    let candidates = candidates
        .order(supplier_material_prices::effective_from_date.asc())
        .load::<DbSupplierPrice>(conn)?;

    let mut overlapping = Vec::new();
    for candidate in candidates {
        let candidate = DomainSupplierPrice::try_from(candidate)?;
        if candidate.window().overlaps(&query.window) {
            overlapping.push(candidate);
        }
    }

    Ok(overlapping)
}

fn ensure_no_overlap(conn: &mut SqliteConnection, query: &OverlapQuery) -> RepositoryResult<()> {
    if load_overlapping(conn, query)?.is_empty() {
        Ok(())
    } else {
        Err(RepositoryError::OverlappingPrice)
    }
}

fn into_view((price, supplier, material): PriceRow) -> RepositoryResult<SupplierPriceView> {
    Ok(SupplierPriceView {
        record: DomainSupplierPrice::try_from(price)?,
        supplier: DomainSupplier::from(supplier),
        master_material: DomainMasterMaterial::from(material),
    })
}

fn load_view(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<Option<SupplierPriceView>> {
    use crate::schema::{master_materials, supplier_material_prices, suppliers};

    let row = supplier_material_prices::table
        .inner_join(suppliers::table.on(supplier_material_prices::supplier_id.eq(suppliers::id)))
        .inner_join(
            master_materials::table
                .on(supplier_material_prices::master_material_id.eq(master_materials::id)),
        )
        .filter(supplier_material_prices::id.eq(id))
        .select((
            DbSupplierPrice::as_select(),
            DbSupplier::as_select(),
            DbMasterMaterial::as_select(),
        ))
        .first::<PriceRow>(conn)
        .optional()?;

    row.map(into_view).transpose()
}

fn require_view(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<SupplierPriceView> {
    load_view(conn, id)?.ok_or(RepositoryError::NotFound)
}
