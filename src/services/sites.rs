use chrono::Utc;

use crate::domain::site::Site;
use crate::forms::sites::SiteForm;
use crate::repository::{SiteReader, SiteWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_site<R>(repo: &R, form: SiteForm) -> ServiceResult<Site>
where
    R: SiteReader + SiteWriter + ?Sized,
{
    let new_site = form
        .into_new_site()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique_name(repo, None, &new_site.name)?;

    let created = repo.create_site(&new_site).map_err(ServiceError::from)?;

    log::info!("Site {} created", created.id);

    Ok(created)
}

pub fn get_site<R>(repo: &R, site_id: i32) -> ServiceResult<Site>
where
    R: SiteReader + ?Sized,
{
    repo.get_site_by_id(site_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("Site not found with id: {site_id}")))
}

pub fn list_sites<R>(repo: &R) -> ServiceResult<Vec<Site>>
where
    R: SiteReader + ?Sized,
{
    repo.list_sites().map_err(ServiceError::from)
}

/// Renames a site. The location changes only when the payload carries one.
pub fn update_site<R>(repo: &R, site_id: i32, form: SiteForm) -> ServiceResult<Site>
where
    R: SiteReader + SiteWriter + ?Sized,
{
    get_site(repo, site_id)?;

    let updates = form
        .into_update_site(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_unique_name(repo, Some(site_id), &updates.name)?;

    repo.update_site(site_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_site<R>(repo: &R, site_id: i32) -> ServiceResult<()>
where
    R: SiteReader + SiteWriter + ?Sized,
{
    get_site(repo, site_id)?;

    repo.delete_site(site_id).map_err(ServiceError::from)?;

    log::info!("Site {site_id} deleted");

    Ok(())
}

fn ensure_unique_name<R>(repo: &R, site_id: Option<i32>, name: &str) -> ServiceResult<()>
where
    R: SiteReader + ?Sized,
{
    let existing = repo.get_site_by_name(name).map_err(ServiceError::from)?;

    match existing {
        Some(site) if Some(site.id) != site_id => Err(ServiceError::Conflict(format!(
            "Site with name '{name}' already exists."
        ))),
        _ => Ok(()),
    }
}
