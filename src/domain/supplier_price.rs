use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Optionally bounded date interval. A missing bound is treated as
/// negative/positive infinity respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day on which the window applies, inclusive.
    pub start: Option<NaiveDate>,
    /// Last day on which the window applies, inclusive.
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// Construct a window from its optional bounds.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether the bounds are consistent (start not after end when both set).
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    /// Whether `date` falls inside the window. Boundary days count.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| end >= date)
    }

    /// Whether the two windows share at least one day. An unbounded side
    /// always reaches the other window, so a fully open window intersects
    /// everything.
    pub fn intersects(&self, other: &DateWindow) -> bool {
        let starts_before_other_ends = match (self.start, other.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        };
        let ends_after_other_starts = match (self.end, other.start) {
            (Some(end), Some(start)) => end >= start,
            _ => true,
        };
        starts_before_other_ends && ends_after_other_starts
    }
}

/// Domain representation of a supplier price tier: a quantity break
/// threshold with a unit price, optionally restricted to a date window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierPrice {
    /// Unique identifier of the price entry.
    pub id: i32,
    /// Owning product/supplier pairing.
    pub product_supplier_id: i32,
    /// Quantity break threshold, in the product's purchase UOM.
    pub quantity: f64,
    /// Unit price in the smallest currency unit (for example cents).
    pub unit_price_cents: i32,
    /// First day the entry is valid, if bounded.
    pub start_date: Option<NaiveDate>,
    /// Last day the entry is valid, if bounded.
    pub end_date: Option<NaiveDate>,
    /// Timestamp for when the entry was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the entry.
    pub updated_at: NaiveDateTime,
}

impl SupplierPrice {
    /// The entry's validity window.
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }

    /// Whether the entry is valid on `reference_date`. Boundary days count.
    pub fn is_valid_on(&self, reference_date: NaiveDate) -> bool {
        self.window().contains(reference_date)
    }

    /// Whether the entry is valid on `reference_date` and agrees with every
    /// field the pattern constrains.
    pub fn matches(&self, reference_date: NaiveDate, pattern: &PricePattern) -> bool {
        self.is_valid_on(reference_date)
            && pattern
                .product_supplier_id
                .is_none_or(|id| id == self.product_supplier_id)
            && pattern.quantity.is_none_or(|q| q == self.quantity)
    }

    /// Unit price rendered for display, e.g. `12.34`.
    pub fn unit_price_formatted(&self) -> String {
        format!("{:.2}", f64::from(self.unit_price_cents) / 100.0)
    }
}

/// Field-equality constraints applied on top of date validity when
/// matching candidate price tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricePattern {
    /// Restrict matches to one product/supplier pairing.
    pub product_supplier_id: Option<i32>,
    /// Restrict matches to one quantity break threshold.
    pub quantity: Option<f64>,
}

impl PricePattern {
    /// Restrict the pattern to a product/supplier pairing.
    pub fn product_supplier(mut self, product_supplier_id: i32) -> Self {
        self.product_supplier_id = Some(product_supplier_id);
        self
    }

    /// Restrict the pattern to a quantity break threshold.
    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// Payload required to insert a new supplier price entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplierPrice {
    /// Owning product/supplier pairing.
    pub product_supplier_id: i32,
    /// Quantity break threshold, in the product's purchase UOM.
    pub quantity: f64,
    /// Unit price in the smallest currency unit.
    pub unit_price_cents: i32,
    /// First day the entry is valid, if bounded.
    pub start_date: Option<NaiveDate>,
    /// Last day the entry is valid, if bounded.
    pub end_date: Option<NaiveDate>,
}

impl NewSupplierPrice {
    /// Build a payload for an always-valid entry.
    pub fn new(product_supplier_id: i32, quantity: f64, unit_price_cents: i32) -> Self {
        Self {
            product_supplier_id,
            quantity,
            unit_price_cents,
            start_date: None,
            end_date: None,
        }
    }

    /// Bound the entry's validity from below.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Bound the entry's validity from above.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// The payload's validity window.
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }
}

/// Patch data applied when updating an existing supplier price entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSupplierPrice {
    /// New quantity break threshold.
    pub quantity: f64,
    /// New unit price in the smallest currency unit.
    pub unit_price_cents: i32,
    /// New lower validity bound, `None` clears it.
    pub start_date: Option<NaiveDate>,
    /// New upper validity bound, `None` clears it.
    pub end_date: Option<NaiveDate>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateSupplierPrice {
    /// Build a patch with the current timestamp.
    pub fn new(
        quantity: f64,
        unit_price_cents: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            quantity,
            unit_price_cents,
            start_date,
            end_date,
            updated_at: chrono::Local::now().naive_local(),
        }
    }

    /// The patched validity window.
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }
}

/// Query definition used to filter supplier price entries for one
/// product/supplier pairing.
#[derive(Debug, Clone)]
pub struct SupplierPriceListQuery {
    /// Owning product/supplier pairing.
    pub product_supplier_id: i32,
    /// Optional exact quantity tier filter.
    pub quantity: Option<f64>,
    /// Only entries valid on this date.
    pub valid_on: Option<NaiveDate>,
    /// Only entries whose window intersects this one.
    pub overlapping: Option<DateWindow>,
    /// Entry excluded from the results (the record being edited).
    pub exclude_id: Option<i32>,
}

impl SupplierPriceListQuery {
    /// Construct a query over all entries of `product_supplier_id`.
    pub fn new(product_supplier_id: i32) -> Self {
        Self {
            product_supplier_id,
            quantity: None,
            valid_on: None,
            overlapping: None,
            exclude_id: None,
        }
    }

    /// Filter the results to one quantity tier.
    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Filter the results to entries valid on `date`.
    pub fn valid_on(mut self, date: NaiveDate) -> Self {
        self.valid_on = Some(date);
        self
    }

    /// Filter the results to entries whose window intersects `window`.
    pub fn overlapping(mut self, window: DateWindow) -> Self {
        self.overlapping = Some(window);
        self
    }

    /// Exclude a single entry, typically the one being updated.
    pub fn exclude(mut self, id: i32) -> Self {
        self.exclude_id = Some(id);
        self
    }
}
