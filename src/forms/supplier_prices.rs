use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::supplier_price::{
    ActivePriceQuery, EffectiveWindow, SupplierPriceDraft, normalize_unit,
};
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a unit of measure.
const UNIT_MAX_LEN: u64 = 20;

/// Fractional digits kept for stored prices.
pub const PRICE_SCALE: u32 = 4;

/// Result type returned by the supplier price form helpers.
pub type SupplierPriceFormResult<T> = Result<T, SupplierPriceFormError>;

/// Errors that can occur while processing supplier price payloads.
#[derive(Debug, Error)]
pub enum SupplierPriceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The unit is empty after sanitization.
    #[error("unit cannot be empty")]
    EmptyUnit,
    /// The price is zero or negative once rounded.
    #[error("price must be greater than zero")]
    NonPositivePrice,
}

/// Payload submitted when adding or updating a supplier price.
///
/// Date ordering is checked by the pricing service, which reports it as
/// invalid data rather than a form error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SupplierPriceForm {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    #[validate(range(min = 1))]
    pub master_material_id: i32,
    pub price: Decimal,
    #[validate(length(min = 1, max = UNIT_MAX_LEN))]
    pub unit: String,
    pub effective_from_date: NaiveDate,
    #[serde(default)]
    pub effective_to_date: Option<NaiveDate>,
    /// Leave out to default to active on create and to keep the flag on update.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl SupplierPriceForm {
    /// Validates and normalizes the payload into a [`SupplierPriceDraft`].
    pub fn into_draft(self) -> SupplierPriceFormResult<SupplierPriceDraft> {
        self.validate()?;

        let unit = normalize_unit(&sanitize_inline_text(&self.unit));
        if unit.is_empty() {
            return Err(SupplierPriceFormError::EmptyUnit);
        }

        let mut price = self
            .price
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if price <= Decimal::ZERO {
            return Err(SupplierPriceFormError::NonPositivePrice);
        }
        // Pads shorter scales so every stored price carries four digits.
        price.rescale(PRICE_SCALE);

        Ok(SupplierPriceDraft {
            supplier_id: self.supplier_id,
            master_material_id: self.master_material_id,
            price,
            unit,
            window: EffectiveWindow::new(self.effective_from_date, self.effective_to_date),
            is_active: self.is_active,
        })
    }
}

/// Query string of the active price lookup. `date` defaults to today.
#[derive(Debug, Deserialize, Validate)]
pub struct ActivePriceParams {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    #[validate(range(min = 1))]
    pub master_material_id: i32,
    #[validate(length(min = 1, max = UNIT_MAX_LEN))]
    pub unit: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ActivePriceParams {
    pub fn into_query(self, today: NaiveDate) -> SupplierPriceFormResult<ActivePriceQuery> {
        self.validate()?;

        let unit = normalize_unit(&self.unit);
        if unit.is_empty() {
            return Err(SupplierPriceFormError::EmptyUnit);
        }

        Ok(ActivePriceQuery::new(
            self.supplier_id,
            self.master_material_id,
            unit,
            self.date.unwrap_or(today),
        ))
    }
}

/// Query string selecting the prices of one supplier for one material.
#[derive(Debug, Deserialize, Validate)]
pub struct SupplierMaterialParams {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    #[validate(range(min = 1))]
    pub master_material_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn form(price: Decimal, unit: &str) -> SupplierPriceForm {
        SupplierPriceForm {
            supplier_id: 1,
            master_material_id: 10,
            price,
            unit: unit.to_string(),
            effective_from_date: date(2024, 1, 1),
            effective_to_date: None,
            is_active: None,
        }
    }

    #[test]
    fn into_draft_normalizes_unit_and_price() {
        let draft = form(dec!(99.123456), "  kg ")
            .into_draft()
            .expect("expected conversion to succeed");

        assert_eq!(draft.unit, "KG");
        assert_eq!(draft.price, dec!(99.1235));
        assert_eq!(draft.window, EffectiveWindow::new(date(2024, 1, 1), None));
        assert_eq!(draft.is_active, None);
    }

    #[test]
    fn into_draft_pads_price_to_four_decimal_places() {
        let draft = form(dec!(100.00), "KG")
            .into_draft()
            .expect("expected conversion to succeed");

        assert_eq!(draft.price.scale(), PRICE_SCALE);
        assert_eq!(draft.price.to_string(), "100.0000");
    }

    #[test]
    fn into_draft_rounds_midpoint_away_from_zero() {
        let draft = form(dec!(0.00005), "KG")
            .into_draft()
            .expect("expected conversion to succeed");

        assert_eq!(draft.price, dec!(0.0001));
    }

    #[test]
    fn into_draft_rejects_price_rounding_to_zero() {
        let result = form(dec!(0.00004), "KG").into_draft();

        assert!(matches!(
            result,
            Err(SupplierPriceFormError::NonPositivePrice)
        ));
    }

    #[test]
    fn into_draft_rejects_negative_price() {
        let result = form(dec!(-5), "KG").into_draft();

        assert!(matches!(
            result,
            Err(SupplierPriceFormError::NonPositivePrice)
        ));
    }

    #[test]
    fn into_draft_rejects_blank_unit() {
        let result = form(dec!(10), "   ").into_draft();

        assert!(matches!(result, Err(SupplierPriceFormError::EmptyUnit)));
    }

    #[test]
    fn into_draft_rejects_missing_supplier() {
        let mut payload = form(dec!(10), "KG");
        payload.supplier_id = 0;

        let result = payload.into_draft();

        assert!(matches!(result, Err(SupplierPriceFormError::Validation(_))));
    }

    #[test]
    fn into_draft_keeps_inverted_dates_for_the_service() {
        let mut payload = form(dec!(10), "KG");
        payload.effective_to_date = Some(date(2023, 12, 31));

        let draft = payload.into_draft().expect("dates are not a form rule");

        assert!(!draft.window.is_ordered());
    }

    #[test]
    fn form_deserializes_price_from_number_and_string() {
        let from_number: SupplierPriceForm = serde_json::from_str(
            r#"{"supplier_id":1,"master_material_id":10,"price":100.25,"unit":"KG","effective_from_date":"2024-01-01"}"#,
        )
        .expect("valid payload");
        let from_string: SupplierPriceForm = serde_json::from_str(
            r#"{"supplier_id":1,"master_material_id":10,"price":"100.25","unit":"KG","effective_from_date":"2024-01-01","effective_to_date":null}"#,
        )
        .expect("valid payload");

        assert_eq!(from_number.price, dec!(100.25));
        assert_eq!(from_string.price, dec!(100.25));
        assert!(from_string.effective_to_date.is_none());
    }

    #[test]
    fn active_price_params_default_to_today() {
        let params = ActivePriceParams {
            supplier_id: 1,
            master_material_id: 10,
            unit: "kg".to_string(),
            date: None,
        };

        let query = params
            .into_query(date(2024, 3, 15))
            .expect("expected conversion to succeed");

        assert_eq!(query.unit, "KG");
        assert_eq!(query.on_date, date(2024, 3, 15));
    }
}
