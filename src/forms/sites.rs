use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::site::{NewSite, UpdateSite};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

const NAME_MAX_LEN: u64 = 255;
const LOCATION_MAX_LEN: u64 = 255;

pub type SiteFormResult<T> = Result<T, SiteFormError>;

#[derive(Debug, Error)]
pub enum SiteFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("site name cannot be empty")]
    EmptyName,
}

/// Payload used to create or update a delivery site.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SiteForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// On update, a missing or blank location keeps the stored one.
    #[validate(length(max = LOCATION_MAX_LEN))]
    #[serde(default)]
    pub location: Option<String>,
}

impl SiteForm {
    fn sanitize(self) -> SiteFormResult<(String, Option<String>)> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(SiteFormError::EmptyName);
        }

        Ok((name, sanitize_optional_text(self.location.as_deref())))
    }

    pub fn into_new_site(self) -> SiteFormResult<NewSite> {
        let (name, location) = self.sanitize()?;

        let mut site = NewSite::new(name);
        site.location = location;

        Ok(site)
    }

    pub fn into_update_site(self, updated_at: NaiveDateTime) -> SiteFormResult<UpdateSite> {
        let (name, location) = self.sanitize()?;

        Ok(UpdateSite {
            name,
            location,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_new_site_sanitizes_fields() {
        let form = SiteForm {
            name: " Colombo   Tower ".to_string(),
            location: Some(" Colombo 03 ".to_string()),
        };

        let site = form.into_new_site().expect("expected conversion to succeed");

        assert_eq!(site.name, "Colombo Tower");
        assert_eq!(site.location.as_deref(), Some("Colombo 03"));
    }

    #[test]
    fn into_update_site_treats_blank_location_as_absent() {
        let form = SiteForm {
            name: "Colombo Tower".to_string(),
            location: Some("  ".to_string()),
        };

        let update = form
            .into_update_site(NaiveDateTime::default())
            .expect("expected conversion to succeed");

        assert_eq!(update.location, None);
    }

    #[test]
    fn into_new_site_rejects_blank_name() {
        let form = SiteForm {
            name: "   ".to_string(),
            location: None,
        };

        assert!(matches!(form.into_new_site(), Err(SiteFormError::EmptyName)));
    }
}
