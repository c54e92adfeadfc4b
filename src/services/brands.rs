use chrono::Utc;

use crate::domain::brand::{Brand, BrandListQuery};
use crate::domain::master_material::MasterMaterialListQuery;
use crate::forms::brands::{BrandForm, BrandImageForm};
use crate::repository::{BrandReader, BrandWriter, MasterMaterialReader};
use crate::services::{ServiceError, ServiceResult};

pub fn create_brand<R>(repo: &R, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    let new_brand = form
        .into_new_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique_name(repo, None, &new_brand.name)?;

    let created = repo.create_brand(&new_brand).map_err(ServiceError::from)?;

    log::info!("Brand {} created", created.id);

    Ok(created)
}

pub fn get_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<Brand>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Brand not found with id: {brand_id}")))
}

pub fn get_brand_by_name<R>(repo: &R, name: &str) -> ServiceResult<Brand>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_name(name.trim())
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Brand not found with name: {name}")))
}

/// All brands, or those whose name contains `search` when it is not blank.
pub fn list_brands<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Brand>>
where
    R: BrandReader + ?Sized,
{
    let mut query = BrandListQuery::new();
    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        query = query.search(term);
    }

    repo.list_brands(query).map_err(ServiceError::from)
}

/// Replaces name, description and logo path.
pub fn update_brand<R>(repo: &R, brand_id: i32, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    get_brand(repo, brand_id)?;

    let updates = form
        .into_update_brand(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique_name(repo, Some(brand_id), &updates.name)?;

    let updated = repo
        .update_brand(brand_id, &updates)
        .map_err(ServiceError::from)?;

    log::info!("Brand {brand_id} updated");

    Ok(updated)
}

pub fn update_brand_image<R>(repo: &R, brand_id: i32, form: BrandImageForm) -> ServiceResult<Brand>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    get_brand(repo, brand_id)?;

    let image = form
        .into_update_brand_image(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_brand_image(brand_id, &image)
        .map_err(ServiceError::from)
}

/// Deletes a brand no material is sold under.
pub fn delete_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<()>
where
    R: BrandReader + BrandWriter + MasterMaterialReader + ?Sized,
{
    let brand = get_brand(repo, brand_id)?;

    let materials = repo
        .list_master_materials(MasterMaterialListQuery::new().brand(brand_id))
        .map_err(ServiceError::from)?;
    if !materials.is_empty() {
        return Err(ServiceError::Conflict(format!(
            "Brand '{}' is used by {} material(s) and cannot be deleted.",
            brand.name,
            materials.len()
        )));
    }

    repo.delete_brand(brand_id).map_err(ServiceError::from)?;

    log::info!("Brand {brand_id} deleted");

    Ok(())
}

fn ensure_unique_name<R>(repo: &R, brand_id: Option<i32>, name: &str) -> ServiceResult<()>
where
    R: BrandReader + ?Sized,
{
    let existing = repo.get_brand_by_name(name).map_err(ServiceError::from)?;

    match existing {
        Some(brand) if Some(brand.id) != brand_id => Err(ServiceError::Conflict(format!(
            "Brand with name '{name}' already exists."
        ))),
        _ => Ok(()),
    }
}
