use chrono::Utc;

use crate::domain::price_revision::{PriceChange, PriceRevisionView};
use crate::domain::supplier_price::{
    ActivePriceQuery, EffectiveWindow, NewSupplierPrice, OverlapQuery, SupplierPrice,
    SupplierPriceListQuery, SupplierPriceView, UpdateSupplierPrice, normalize_unit,
};
use crate::forms::supplier_prices::SupplierPriceForm;
use crate::repository::{
    MasterMaterialReader, PriceRevisionReader, SupplierPriceReader, SupplierPriceWriter,
    SupplierReader,
};
use crate::services::{
    ALREADY_INACTIVE_MESSAGE, OVERLAPPING_PRICE_MESSAGE, ServiceError, ServiceResult,
};

const INVERTED_DATES_MESSAGE: &str = "Effective from date cannot be after effective to date.";
const IMMUTABLE_REFERENCES_MESSAGE: &str = "Supplier and Master Material cannot be changed for an \
existing price entry. Create a new one instead.";

/// Records a new supplier price and its initial revision.
pub fn add_price<R>(
    repo: &R,
    form: SupplierPriceForm,
    changed_by: &str,
) -> ServiceResult<SupplierPriceView>
where
    R: SupplierPriceReader + SupplierPriceWriter + SupplierReader + MasterMaterialReader + ?Sized,
{
    let draft = form
        .into_draft()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_ordered(&draft.window)?;
    ensure_supplier_exists(repo, draft.supplier_id)?;
    ensure_material_exists(repo, draft.master_material_id)?;
    ensure_no_overlap(repo, &draft.overlap_query(None))?;

    let now = Utc::now().naive_utc();
    let new_price = NewSupplierPrice::from_draft(draft, now);

    let created = repo
        .create_supplier_price(&new_price, &PriceChange::initial(changed_by, now))
        .map_err(ServiceError::from)?;

    log::info!(
        "Supplier price {} added for supplier {} material {} by {}",
        created.record.id,
        created.supplier.name,
        created.master_material.name,
        changed_by
    );

    Ok(created)
}

/// Replaces the terms of an existing price and logs the old and new values.
///
/// Supplier and material are fixed once a record exists. `is_active` is only
/// changed when the form carries it.
pub fn update_price<R>(
    repo: &R,
    price_id: i32,
    form: SupplierPriceForm,
    changed_by: &str,
) -> ServiceResult<SupplierPriceView>
where
    R: SupplierPriceReader + SupplierPriceWriter + ?Sized,
{
    let existing = load_price(repo, price_id)?;
    let previous = existing.snapshot();

    let draft = form
        .into_draft()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_ordered(&draft.window)?;

    if draft.supplier_id != existing.supplier_id
        || draft.master_material_id != existing.master_material_id
    {
        return Err(ServiceError::InvalidData(
            IMMUTABLE_REFERENCES_MESSAGE.to_string(),
        ));
    }

    ensure_no_overlap(repo, &draft.overlap_query(Some(price_id)))?;

    let now = Utc::now().naive_utc();
    let updates = UpdateSupplierPrice::from_draft(draft, now);

    let updated = repo
        .update_supplier_price(
            price_id,
            &updates,
            &PriceChange::updated(previous, changed_by, now),
        )
        .map_err(ServiceError::from)?;

    log::info!("Supplier price {price_id} updated by {changed_by}");

    Ok(updated)
}

/// Marks a price inactive. The effective dates are left as they are.
///
/// The writer re-checks `is_active` inside its transaction, so a concurrent
/// deactivation also ends in "already inactive".
pub fn deactivate_price<R>(
    repo: &R,
    price_id: i32,
    changed_by: &str,
) -> ServiceResult<SupplierPriceView>
where
    R: SupplierPriceReader + SupplierPriceWriter + ?Sized,
{
    let existing = load_price(repo, price_id)?;

    if !existing.is_active {
        return Err(ServiceError::InvalidData(
            ALREADY_INACTIVE_MESSAGE.to_string(),
        ));
    }

    let now = Utc::now().naive_utc();
    let deactivated = repo
        .deactivate_supplier_price(
            price_id,
            &PriceChange::deactivated(existing.snapshot(), changed_by, now),
        )
        .map_err(ServiceError::from)?;

    log::info!("Supplier price {price_id} deactivated by {changed_by}");

    Ok(deactivated)
}

pub fn get_price<R>(repo: &R, price_id: i32) -> ServiceResult<SupplierPriceView>
where
    R: SupplierPriceReader + ?Sized,
{
    repo.get_supplier_price_view(price_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Supplier price not found with id: {price_id}"))
        })
}

/// Every price of one supplier, newest effective date first.
pub fn list_prices_by_supplier<R>(
    repo: &R,
    supplier_id: i32,
) -> ServiceResult<Vec<SupplierPriceView>>
where
    R: SupplierPriceReader + SupplierReader + ?Sized,
{
    ensure_supplier_exists(repo, supplier_id)?;

    repo.list_supplier_prices(SupplierPriceListQuery::new().supplier(supplier_id))
        .map_err(ServiceError::from)
}

/// Every price quoted for one material, newest effective date first.
pub fn list_prices_by_material<R>(
    repo: &R,
    master_material_id: i32,
) -> ServiceResult<Vec<SupplierPriceView>>
where
    R: SupplierPriceReader + MasterMaterialReader + ?Sized,
{
    ensure_material_exists(repo, master_material_id)?;

    repo.list_supplier_prices(SupplierPriceListQuery::new().material(master_material_id))
        .map_err(ServiceError::from)
}

pub fn list_prices_by_supplier_and_material<R>(
    repo: &R,
    supplier_id: i32,
    master_material_id: i32,
) -> ServiceResult<Vec<SupplierPriceView>>
where
    R: SupplierPriceReader + SupplierReader + MasterMaterialReader + ?Sized,
{
    ensure_supplier_exists(repo, supplier_id)?;
    ensure_material_exists(repo, master_material_id)?;

    repo.list_supplier_prices(
        SupplierPriceListQuery::new()
            .supplier(supplier_id)
            .material(master_material_id),
    )
    .map_err(ServiceError::from)
}

/// Price in force on the query date, or `None` when nothing applies.
pub fn get_active_price<R>(
    repo: &R,
    query: ActivePriceQuery,
) -> ServiceResult<Option<SupplierPriceView>>
where
    R: SupplierPriceReader + ?Sized,
{
    let query = ActivePriceQuery {
        unit: normalize_unit(&query.unit),
        ..query
    };

    repo.find_active_supplier_price(&query)
        .map_err(ServiceError::from)
}

/// Revision log of one price, most recent change first, with the supplier and
/// material names.
pub fn get_price_revision_history<R>(
    repo: &R,
    price_id: i32,
) -> ServiceResult<Vec<PriceRevisionView>>
where
    R: SupplierPriceReader + PriceRevisionReader + ?Sized,
{
    load_price(repo, price_id)?;

    repo.list_price_revisions(price_id)
        .map_err(ServiceError::from)
}

fn load_price<R>(repo: &R, price_id: i32) -> ServiceResult<SupplierPrice>
where
    R: SupplierPriceReader + ?Sized,
{
    repo.get_supplier_price_by_id(price_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Supplier price not found with id: {price_id}"))
        })
}

fn ensure_ordered(window: &EffectiveWindow) -> ServiceResult<()> {
    if window.is_ordered() {
        Ok(())
    } else {
        Err(ServiceError::InvalidData(INVERTED_DATES_MESSAGE.to_string()))
    }
}

fn ensure_supplier_exists<R>(repo: &R, supplier_id: i32) -> ServiceResult<()>
where
    R: SupplierReader + ?Sized,
{
    match repo
        .get_supplier_by_id(supplier_id)
        .map_err(ServiceError::from)?
    {
        Some(_) => Ok(()),
        None => Err(ServiceError::NotFound(format!(
            "Supplier not found with id: {supplier_id}"
        ))),
    }
}

fn ensure_material_exists<R>(repo: &R, master_material_id: i32) -> ServiceResult<()>
where
    R: MasterMaterialReader + ?Sized,
{
    match repo
        .get_master_material_by_id(master_material_id)
        .map_err(ServiceError::from)?
    {
        Some(_) => Ok(()),
        None => Err(ServiceError::NotFound(format!(
            "Master material not found with id: {master_material_id}"
        ))),
    }
}

fn ensure_no_overlap<R>(repo: &R, query: &OverlapQuery) -> ServiceResult<()>
where
    R: SupplierPriceReader + ?Sized,
{
    let overlapping = repo
        .find_overlapping_supplier_prices(query)
        .map_err(ServiceError::from)?;

    if overlapping.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::InvalidData(
            OVERLAPPING_PRICE_MESSAGE.to_string(),
        ))
    }
}
