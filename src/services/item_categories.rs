use chrono::Utc;

use crate::domain::item_category::ItemCategory;
use crate::domain::master_material::MasterMaterialListQuery;
use crate::forms::item_categories::ItemCategoryForm;
use crate::repository::{ItemCategoryReader, ItemCategoryWriter, MasterMaterialReader};
use crate::services::{ServiceError, ServiceResult};

pub fn create_item_category<R>(repo: &R, form: ItemCategoryForm) -> ServiceResult<ItemCategory>
where
    R: ItemCategoryReader + ItemCategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_item_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique_name(repo, None, &new_category.name)?;

    let created = repo
        .create_item_category(&new_category)
        .map_err(ServiceError::from)?;

    log::info!("Item category {} created", created.id);

    Ok(created)
}

pub fn get_item_category<R>(repo: &R, category_id: i32) -> ServiceResult<ItemCategory>
where
    R: ItemCategoryReader + ?Sized,
{
    repo.get_item_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("Item category not found with id: {category_id}"))
        })
}

pub fn list_item_categories<R>(repo: &R) -> ServiceResult<Vec<ItemCategory>>
where
    R: ItemCategoryReader + ?Sized,
{
    repo.list_item_categories().map_err(ServiceError::from)
}

pub fn update_item_category<R>(
    repo: &R,
    category_id: i32,
    form: ItemCategoryForm,
) -> ServiceResult<ItemCategory>
where
    R: ItemCategoryReader + ItemCategoryWriter + ?Sized,
{
    get_item_category(repo, category_id)?;

    let updates = form
        .into_update_item_category(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique_name(repo, Some(category_id), &updates.name)?;

    repo.update_item_category(category_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a category no material belongs to.
pub fn delete_item_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: ItemCategoryReader + ItemCategoryWriter + MasterMaterialReader + ?Sized,
{
    get_item_category(repo, category_id)?;

    let materials = repo
        .list_master_materials(MasterMaterialListQuery::new().category(category_id))
        .map_err(ServiceError::from)?;
    if !materials.is_empty() {
        return Err(ServiceError::Conflict(format!(
            "Item category {category_id} is used by {} material(s) and cannot be deleted.",
            materials.len()
        )));
    }

    repo.delete_item_category(category_id)
        .map_err(ServiceError::from)?;

    log::info!("Item category {category_id} deleted");

    Ok(())
}

fn ensure_unique_name<R>(repo: &R, category_id: Option<i32>, name: &str) -> ServiceResult<()>
where
    R: ItemCategoryReader + ?Sized,
{
    let existing = repo
        .get_item_category_by_name(name)
        .map_err(ServiceError::from)?;

    match existing {
        Some(category) if Some(category.id) != category_id => Err(ServiceError::Conflict(
            format!("Item category with name '{name}' already exists."),
        )),
        _ => Ok(()),
    }
}
