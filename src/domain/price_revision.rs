use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::supplier_price::{PriceSnapshot, SupplierPrice};

/// Reason recorded when a price record is first created.
pub const INITIAL_PRICE_REASON: &str = "Initial price setting.";
/// Reason recorded when the price terms of a record change.
pub const PRICE_UPDATED_REASON: &str = "Price details updated.";
/// Reason recorded when a price record is deactivated.
pub const PRICE_DEACTIVATED_REASON: &str = "Price entry deactivated.";

/// Immutable audit entry describing one change to a price record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRevision {
    /// Unique identifier of the log entry.
    pub id: i32,
    /// Price record the entry documents.
    pub supplier_material_price_id: i32,
    /// Price before the change; `None` for the initial entry.
    pub old_price: Option<Decimal>,
    pub new_price: Decimal,
    pub old_effective_from_date: Option<NaiveDate>,
    pub new_effective_from_date: NaiveDate,
    pub old_effective_to_date: Option<NaiveDate>,
    pub new_effective_to_date: Option<NaiveDate>,
    /// Activation flag before the change; `None` for the initial entry.
    pub old_is_active: Option<bool>,
    pub new_is_active: bool,
    /// When the change was written.
    pub change_timestamp: NaiveDateTime,
    /// Free-text identifier of whoever made the change.
    pub changed_by_user: String,
    pub reason_for_change: Option<String>,
}

/// Log entry together with the names of the supplier and material its
/// price record belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRevisionView {
    #[serde(flatten)]
    pub revision: PriceRevision,
    pub supplier_name: String,
    pub master_material_name: String,
}

/// Log entry ready to be appended for a price record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceRevision {
    pub supplier_material_price_id: i32,
    pub old_price: Option<Decimal>,
    pub new_price: Decimal,
    pub old_effective_from_date: Option<NaiveDate>,
    pub new_effective_from_date: NaiveDate,
    pub old_effective_to_date: Option<NaiveDate>,
    pub new_effective_to_date: Option<NaiveDate>,
    pub old_is_active: Option<bool>,
    pub new_is_active: bool,
    pub change_timestamp: NaiveDateTime,
    pub changed_by_user: String,
    pub reason_for_change: Option<String>,
}

impl NewPriceRevision {
    /// Describe `change` as applied to the already persisted `saved` record.
    pub fn record(saved: &SupplierPrice, change: &PriceChange) -> Self {
        let previous = change.previous;
        Self {
            supplier_material_price_id: saved.id,
            old_price: previous.map(|old| old.price),
            new_price: saved.price,
            old_effective_from_date: previous.map(|old| old.effective_from_date),
            new_effective_from_date: saved.effective_from_date,
            old_effective_to_date: previous.and_then(|old| old.effective_to_date),
            new_effective_to_date: saved.effective_to_date,
            old_is_active: previous.map(|old| old.is_active),
            new_is_active: saved.is_active,
            change_timestamp: change.changed_at,
            changed_by_user: change.changed_by_user.clone(),
            reason_for_change: change.reason_for_change.clone(),
        }
    }
}

/// Who changed a price record, why, and what it looked like beforehand.
///
/// Writers persist the record mutation and the matching [`NewPriceRevision`]
/// in one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    /// State before the mutation; `None` when the record is being created.
    pub previous: Option<PriceSnapshot>,
    pub changed_by_user: String,
    pub reason_for_change: Option<String>,
    pub changed_at: NaiveDateTime,
}

impl PriceChange {
    pub fn initial(changed_by_user: impl Into<String>, changed_at: NaiveDateTime) -> Self {
        Self {
            previous: None,
            changed_by_user: changed_by_user.into(),
            reason_for_change: Some(INITIAL_PRICE_REASON.to_string()),
            changed_at,
        }
    }

    pub fn updated(
        previous: PriceSnapshot,
        changed_by_user: impl Into<String>,
        changed_at: NaiveDateTime,
    ) -> Self {
        Self {
            previous: Some(previous),
            changed_by_user: changed_by_user.into(),
            reason_for_change: Some(PRICE_UPDATED_REASON.to_string()),
            changed_at,
        }
    }

    pub fn deactivated(
        previous: PriceSnapshot,
        changed_by_user: impl Into<String>,
        changed_at: NaiveDateTime,
    ) -> Self {
        Self {
            previous: Some(previous),
            changed_by_user: changed_by_user.into(),
            reason_for_change: Some(PRICE_DEACTIVATED_REASON.to_string()),
            changed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn sample_price() -> SupplierPrice {
        SupplierPrice {
            id: 4,
            supplier_id: 1,
            master_material_id: 10,
            price: Decimal::new(1100000, 4),
            unit: "KG".to_string(),
            effective_from_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            effective_to_date: None,
            is_active: true,
            created_at: timestamp(1),
            updated_at: timestamp(2),
        }
    }

    #[test]
    fn initial_revision_has_no_old_values() {
        let saved = sample_price();
        let change = PriceChange::initial("buyer", timestamp(1));

        let revision = NewPriceRevision::record(&saved, &change);

        assert_eq!(revision.supplier_material_price_id, 4);
        assert_eq!(revision.old_price, None);
        assert_eq!(revision.old_effective_from_date, None);
        assert_eq!(revision.old_is_active, None);
        assert_eq!(revision.new_price, saved.price);
        assert!(revision.new_is_active);
        assert_eq!(
            revision.reason_for_change.as_deref(),
            Some(INITIAL_PRICE_REASON)
        );
    }

    #[test]
    fn deactivation_revision_records_status_change() {
        let mut saved = sample_price();
        let previous = saved.snapshot();
        saved.is_active = false;
        let change = PriceChange::deactivated(previous, "auditor", timestamp(3));

        let revision = NewPriceRevision::record(&saved, &change);

        assert_eq!(revision.old_is_active, Some(true));
        assert!(!revision.new_is_active);
        assert_eq!(revision.old_price, Some(saved.price));
        assert_eq!(revision.changed_by_user, "auditor");
        assert_eq!(revision.change_timestamp, timestamp(3));
    }
}
