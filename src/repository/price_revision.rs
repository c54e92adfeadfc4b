use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::price_revision::{
    NewPriceRevision as DomainNewPriceRevision, PriceRevision as DomainPriceRevision,
    PriceRevisionView,
};
use crate::models::price_revision::{
    NewPriceRevision as DbNewPriceRevision, PriceRevision as DbPriceRevision,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PriceRevisionReader};

impl PriceRevisionReader for DieselRepository {
    fn list_price_revisions(
        &self,
        supplier_price_id: i32,
    ) -> RepositoryResult<Vec<PriceRevisionView>> {
        use crate::schema::{
            master_materials, price_revision_logs, supplier_material_prices, suppliers,
        };

        let mut conn = self.conn()?;

        let rows = price_revision_logs::table
            .inner_join(
                supplier_material_prices::table.on(price_revision_logs::supplier_material_price_id
                    .eq(supplier_material_prices::id)),
            )
            .inner_join(suppliers::table.on(supplier_material_prices::supplier_id.eq(suppliers::id)))
            .inner_join(
                master_materials::table
                    .on(supplier_material_prices::master_material_id.eq(master_materials::id)),
            )
            .filter(price_revision_logs::supplier_material_price_id.eq(supplier_price_id))
            .select((
                DbPriceRevision::as_select(),
                suppliers::name,
                master_materials::name,
            ))
            .order((
                price_revision_logs::change_timestamp.desc(),
                price_revision_logs::id.desc(),
            ))
            .load::<(DbPriceRevision, String, String)>(&mut conn)?;

        rows.into_iter()
            .map(|(revision, supplier_name, master_material_name)| {
                Ok(PriceRevisionView {
                    revision: DomainPriceRevision::try_from(revision)?,
                    supplier_name,
                    master_material_name,
                })
            })
            .collect()
    }
}

/// Append one entry to the log. Callers run this inside the transaction that
/// mutates the price record.
pub(crate) fn append_revision(
    conn: &mut SqliteConnection,
    revision: &DomainNewPriceRevision,
) -> RepositoryResult<DomainPriceRevision> {
    use crate::schema::price_revision_logs;

    let appended = diesel::insert_into(price_revision_logs::table)
        .values(&DbNewPriceRevision::from(revision))
        .get_result::<DbPriceRevision>(conn)?;

    DomainPriceRevision::try_from(appended)
}
