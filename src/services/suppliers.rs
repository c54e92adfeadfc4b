use chrono::Utc;

use crate::domain::supplier::{Supplier, SupplierListQuery};
use crate::domain::supplier_price::SupplierPriceListQuery;
use crate::forms::suppliers::SupplierForm;
use crate::repository::{SupplierPriceReader, SupplierReader, SupplierWriter};
use crate::services::{ServiceError, ServiceResult};

/// Registers a new supplier with a unique name and, when given, a unique email.
pub fn create_supplier<R>(repo: &R, form: SupplierForm) -> ServiceResult<Supplier>
where
    R: SupplierReader + SupplierWriter + ?Sized,
{
    let new_supplier = form
        .into_new_supplier()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique(repo, None, &new_supplier.name, new_supplier.email.as_deref())?;

    let created = repo
        .create_supplier(&new_supplier)
        .map_err(ServiceError::from)?;

    log::info!("Supplier {} created", created.id);

    Ok(created)
}

pub fn get_supplier<R>(repo: &R, supplier_id: i32) -> ServiceResult<Supplier>
where
    R: SupplierReader + ?Sized,
{
    repo.get_supplier_by_id(supplier_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Supplier not found with id: {supplier_id}")))
}

pub fn get_supplier_by_name<R>(repo: &R, name: &str) -> ServiceResult<Supplier>
where
    R: SupplierReader + ?Sized,
{
    repo.get_supplier_by_name(name.trim())
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Supplier not found with name: {name}")))
}

/// Suppliers ordered by name, optionally filtered by a name fragment.
pub fn list_suppliers<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    let mut query = SupplierListQuery::new();
    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        query = query.search(term);
    }

    repo.list_suppliers(query).map_err(ServiceError::from)
}

/// Replaces every field of a supplier. Uniqueness is checked against the
/// other suppliers only.
pub fn update_supplier<R>(repo: &R, supplier_id: i32, form: SupplierForm) -> ServiceResult<Supplier>
where
    R: SupplierReader + SupplierWriter + ?Sized,
{
    get_supplier(repo, supplier_id)?;

    let updates = form
        .into_update_supplier(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique(
        repo,
        Some(supplier_id),
        &updates.name,
        updates.email.as_deref(),
    )?;

    let updated = repo
        .update_supplier(supplier_id, &updates)
        .map_err(ServiceError::from)?;

    log::info!("Supplier {supplier_id} updated");

    Ok(updated)
}

/// Deletes a supplier that no price record refers to.
pub fn delete_supplier<R>(repo: &R, supplier_id: i32) -> ServiceResult<()>
where
    R: SupplierReader + SupplierWriter + SupplierPriceReader + ?Sized,
{
    get_supplier(repo, supplier_id)?;

    let prices = repo
        .list_supplier_prices(SupplierPriceListQuery::new().supplier(supplier_id))
        .map_err(ServiceError::from)?;
    if !prices.is_empty() {
        return Err(ServiceError::Conflict(format!(
            "Supplier {supplier_id} has price records and cannot be deleted."
        )));
    }

    repo.delete_supplier(supplier_id)
        .map_err(ServiceError::from)?;

    log::info!("Supplier {supplier_id} deleted");

    Ok(())
}

fn ensure_unique<R>(
    repo: &R,
    supplier_id: Option<i32>,
    name: &str,
    email: Option<&str>,
) -> ServiceResult<()>
where
    R: SupplierReader + ?Sized,
{
    let is_other = |existing: &Supplier| Some(existing.id) != supplier_id;

    let by_name = repo
        .get_supplier_by_name(name)
        .map_err(ServiceError::from)?;
    if by_name.as_ref().is_some_and(is_other) {
        return Err(ServiceError::Conflict(format!(
            "Supplier with name '{name}' already exists."
        )));
    }

    if let Some(email) = email {
        let by_email = repo
            .get_supplier_by_email(email)
            .map_err(ServiceError::from)?;
        if by_email.as_ref().is_some_and(is_other) {
            return Err(ServiceError::Conflict(format!(
                "Supplier with email '{email}' already exists."
            )));
        }
    }

    Ok(())
}
