use chrono::Utc;

use crate::domain::master_material::{MasterMaterial, MasterMaterialListQuery};
use crate::domain::supplier_price::SupplierPriceListQuery;
use crate::forms::master_materials::MasterMaterialForm;
use crate::repository::{
    BrandReader, ItemCategoryReader, MasterMaterialReader, MasterMaterialWriter,
    SupplierPriceReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Adds a material to the catalogue. The category and any brand must exist;
/// name and code must be unused.
pub fn create_master_material<R>(repo: &R, form: MasterMaterialForm) -> ServiceResult<MasterMaterial>
where
    R: MasterMaterialReader + MasterMaterialWriter + ItemCategoryReader + BrandReader + ?Sized,
{
    let new_material = form
        .into_new_master_material()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_category_exists(repo, new_material.item_category_id)?;
    if let Some(brand_id) = new_material.brand_id {
        ensure_brand_exists(repo, brand_id)?;
    }
    ensure_unique(
        repo,
        None,
        &new_material.name,
        new_material.material_code.as_deref(),
    )?;

    let created = repo
        .create_master_material(&new_material)
        .map_err(ServiceError::from)?;

    log::info!("Master material {} created", created.id);

    Ok(created)
}

pub fn get_master_material<R>(repo: &R, material_id: i32) -> ServiceResult<MasterMaterial>
where
    R: MasterMaterialReader + ?Sized,
{
    repo.get_master_material_by_id(material_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Master material not found with id: {material_id}"))
        })
}

pub fn get_master_material_by_code<R>(repo: &R, code: &str) -> ServiceResult<MasterMaterial>
where
    R: MasterMaterialReader + ?Sized,
{
    repo.get_master_material_by_code(code.trim())
        .map_err(ServiceError::from)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Master material not found with code: {code}"))
        })
}

pub fn list_master_materials<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<MasterMaterial>>
where
    R: MasterMaterialReader + ?Sized,
{
    let mut query = MasterMaterialListQuery::new();
    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        query = query.search(term);
    }

    repo.list_master_materials(query)
        .map_err(ServiceError::from)
}

pub fn list_master_materials_by_category<R>(
    repo: &R,
    category_id: i32,
) -> ServiceResult<Vec<MasterMaterial>>
where
    R: MasterMaterialReader + ItemCategoryReader + ?Sized,
{
    ensure_category_exists(repo, category_id)?;

    repo.list_master_materials(MasterMaterialListQuery::new().category(category_id))
        .map_err(ServiceError::from)
}

pub fn list_master_materials_by_brand<R>(
    repo: &R,
    brand_id: i32,
) -> ServiceResult<Vec<MasterMaterial>>
where
    R: MasterMaterialReader + BrandReader + ?Sized,
{
    ensure_brand_exists(repo, brand_id)?;

    repo.list_master_materials(MasterMaterialListQuery::new().brand(brand_id))
        .map_err(ServiceError::from)
}

/// Replaces every field of a material. A blank code or missing brand clears
/// it.
pub fn update_master_material<R>(
    repo: &R,
    material_id: i32,
    form: MasterMaterialForm,
) -> ServiceResult<MasterMaterial>
where
    R: MasterMaterialReader + MasterMaterialWriter + ItemCategoryReader + BrandReader + ?Sized,
{
    get_master_material(repo, material_id)?;

    let updates = form
        .into_update_master_material(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_category_exists(repo, updates.item_category_id)?;
    if let Some(brand_id) = updates.brand_id {
        ensure_brand_exists(repo, brand_id)?;
    }
    ensure_unique(
        repo,
        Some(material_id),
        &updates.name,
        updates.material_code.as_deref(),
    )?;

    let updated = repo
        .update_master_material(material_id, &updates)
        .map_err(ServiceError::from)?;

    log::info!("Master material {material_id} updated");

    Ok(updated)
}

/// Deletes a material no price record refers to.
pub fn delete_master_material<R>(repo: &R, material_id: i32) -> ServiceResult<()>
where
    R: MasterMaterialReader + MasterMaterialWriter + SupplierPriceReader + ?Sized,
{
    get_master_material(repo, material_id)?;

    let prices = repo
        .list_supplier_prices(SupplierPriceListQuery::new().material(material_id))
        .map_err(ServiceError::from)?;
    if !prices.is_empty() {
        return Err(ServiceError::Conflict(format!(
            "Master material {material_id} has price records and cannot be deleted."
        )));
    }

    repo.delete_master_material(material_id)
        .map_err(ServiceError::from)?;

    log::info!("Master material {material_id} deleted");

    Ok(())
}

fn ensure_category_exists<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: ItemCategoryReader + ?Sized,
{
    repo.get_item_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .map(|_| ())
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Item category not found with id: {category_id}"))
        })
}

fn ensure_brand_exists<R>(repo: &R, brand_id: i32) -> ServiceResult<()>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)
        .map_err(ServiceError::from)?
        .map(|_| ())
        .ok_or_else(|| ServiceError::NotFound(format!("Brand not found with id: {brand_id}")))
}

fn ensure_unique<R>(
    repo: &R,
    material_id: Option<i32>,
    name: &str,
    code: Option<&str>,
) -> ServiceResult<()>
where
    R: MasterMaterialReader + ?Sized,
{
    let is_other = |existing: &MasterMaterial| Some(existing.id) != material_id;

    let by_name = repo
        .get_master_material_by_name(name)
        .map_err(ServiceError::from)?;
    if by_name.as_ref().is_some_and(is_other) {
        return Err(ServiceError::Conflict(format!(
            "Master material with name '{name}' already exists."
        )));
    }

    if let Some(code) = code {
        let by_code = repo
            .get_master_material_by_code(code)
            .map_err(ServiceError::from)?;
        if by_code.as_ref().is_some_and(is_other) {
            return Err(ServiceError::Conflict(format!(
                "Master material with code '{code}' already exists."
            )));
        }
    }

    Ok(())
}
