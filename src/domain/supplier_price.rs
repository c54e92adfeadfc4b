use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::master_material::MasterMaterial;
use crate::domain::supplier::Supplier;

/// Canonical spelling of a unit of measure: trimmed and upper-cased, so
/// `" kg"` and `"KG"` name the same unit.
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_uppercase()
}

/// End of an effective window. An open end sorts after every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum WindowEnd {
    On(NaiveDate),
    Open,
}

/// Inclusive date range over which a price applies; `to = None` never ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectiveWindow {
    /// First day the price applies.
    pub from: NaiveDate,
    /// Last day the price applies, if bounded.
    pub to: Option<NaiveDate>,
}

impl EffectiveWindow {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    fn end(&self) -> WindowEnd {
        self.to.map_or(WindowEnd::Open, WindowEnd::On)
    }

    /// `false` when the window ends before it starts.
    pub fn is_ordered(&self) -> bool {
        WindowEnd::On(self.from) <= self.end()
    }

    /// Whether both windows apply on at least one common day. Bounds are
    /// inclusive, so windows sharing only a boundary day overlap.
    pub fn overlaps(&self, other: &EffectiveWindow) -> bool {
        WindowEnd::On(self.from) <= other.end() && WindowEnd::On(other.from) <= self.end()
    }
}

/// One supplier's price for one material and unit over an effective window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierPrice {
    /// Unique identifier of the price record.
    pub id: i32,
    /// Supplier offering the price. Fixed once the record exists.
    pub supplier_id: i32,
    /// Material being priced. Fixed once the record exists.
    pub master_material_id: i32,
    /// Price per unit with four fractional digits.
    pub price: Decimal,
    /// Unit of measure the price refers to, e.g. `KG`.
    pub unit: String,
    /// Inclusive first day of validity.
    pub effective_from_date: NaiveDate,
    /// Inclusive last day of validity; `None` for open-ended prices.
    pub effective_to_date: Option<NaiveDate>,
    /// Deactivated records never resolve as the active price.
    pub is_active: bool,
    /// Timestamp for when the price record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the price record.
    pub updated_at: NaiveDateTime,
}

impl SupplierPrice {
    pub fn window(&self) -> EffectiveWindow {
        EffectiveWindow::new(self.effective_from_date, self.effective_to_date)
    }

    /// Captures the fields tracked by the revision log before a mutation.
    pub fn snapshot(&self) -> PriceSnapshot {
        PriceSnapshot {
            price: self.price,
            effective_from_date: self.effective_from_date,
            effective_to_date: self.effective_to_date,
            is_active: self.is_active,
        }
    }
}

/// Price record as returned to clients, with the supplier and material it
/// refers to. The record's own fields serialize at the top level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierPriceView {
    #[serde(flatten)]
    pub record: SupplierPrice,
    pub supplier: Supplier,
    pub master_material: MasterMaterial,
}

/// State of a price record as recorded on either side of a revision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSnapshot {
    pub price: Decimal,
    pub effective_from_date: NaiveDate,
    pub effective_to_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Validated price terms submitted when adding or updating a price record.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierPriceDraft {
    pub supplier_id: i32,
    pub master_material_id: i32,
    pub price: Decimal,
    pub unit: String,
    pub window: EffectiveWindow,
    /// Explicit activation flag; `None` keeps the default or current value.
    pub is_active: Option<bool>,
}

impl SupplierPriceDraft {
    /// Query for active records whose windows collide with this draft.
    pub fn overlap_query(&self, exclude_id: Option<i32>) -> OverlapQuery {
        OverlapQuery {
            supplier_id: self.supplier_id,
            master_material_id: self.master_material_id,
            unit: self.unit.clone(),
            window: self.window,
            exclude_id,
        }
    }
}

/// Payload required to insert a new price record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplierPrice {
    pub supplier_id: i32,
    pub master_material_id: i32,
    pub price: Decimal,
    pub unit: String,
    pub effective_from_date: NaiveDate,
    pub effective_to_date: Option<NaiveDate>,
    pub is_active: bool,
    /// Timestamp captured when the payload was created.
    pub created_at: NaiveDateTime,
}

impl NewSupplierPrice {
    /// Build an insert payload from a draft. Records are active unless the draft says otherwise.
    pub fn from_draft(draft: SupplierPriceDraft, created_at: NaiveDateTime) -> Self {
        Self {
            supplier_id: draft.supplier_id,
            master_material_id: draft.master_material_id,
            price: draft.price,
            unit: draft.unit,
            effective_from_date: draft.window.from,
            effective_to_date: draft.window.to,
            is_active: draft.is_active.unwrap_or(true),
            created_at,
        }
    }

    pub fn window(&self) -> EffectiveWindow {
        EffectiveWindow::new(self.effective_from_date, self.effective_to_date)
    }

    pub fn overlap_query(&self) -> OverlapQuery {
        OverlapQuery {
            supplier_id: self.supplier_id,
            master_material_id: self.master_material_id,
            unit: self.unit.clone(),
            window: self.window(),
            exclude_id: None,
        }
    }
}

/// Patch data applied when updating an existing price record.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSupplierPrice {
    pub price: Decimal,
    pub unit: String,
    pub effective_from_date: NaiveDate,
    /// New end date; `None` makes the price open-ended.
    pub effective_to_date: Option<NaiveDate>,
    /// Only applied when present.
    pub is_active: Option<bool>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateSupplierPrice {
    pub fn from_draft(draft: SupplierPriceDraft, updated_at: NaiveDateTime) -> Self {
        Self {
            price: draft.price,
            unit: draft.unit,
            effective_from_date: draft.window.from,
            effective_to_date: draft.window.to,
            is_active: draft.is_active,
            updated_at,
        }
    }

    pub fn window(&self) -> EffectiveWindow {
        EffectiveWindow::new(self.effective_from_date, self.effective_to_date)
    }
}

/// Active records of one supplier/material/unit colliding with `window`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapQuery {
    pub supplier_id: i32,
    pub master_material_id: i32,
    pub unit: String,
    pub window: EffectiveWindow,
    /// Record being updated, which never collides with itself.
    pub exclude_id: Option<i32>,
}

/// Lookup of the price in force for a supplier/material/unit on a date.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePriceQuery {
    pub supplier_id: i32,
    pub master_material_id: i32,
    pub unit: String,
    pub on_date: NaiveDate,
}

impl ActivePriceQuery {
    pub fn new(
        supplier_id: i32,
        master_material_id: i32,
        unit: impl Into<String>,
        on_date: NaiveDate,
    ) -> Self {
        Self {
            supplier_id,
            master_material_id,
            unit: unit.into(),
            on_date,
        }
    }
}

/// Query definition used to list price records.
#[derive(Debug, Clone, Default)]
pub struct SupplierPriceListQuery {
    /// Restrict the results to one supplier.
    pub supplier_id: Option<i32>,
    /// Restrict the results to one material.
    pub master_material_id: Option<i32>,
}

impl SupplierPriceListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supplier(mut self, supplier_id: i32) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub fn material(mut self, master_material_id: i32) -> Self {
        self.master_material_id = Some(master_material_id);
        self
    }
}
