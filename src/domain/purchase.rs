use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchase document being assembled by the host workflow. Only the
/// fields price computation needs are carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Supplier the purchase is placed with.
    pub supplier_id: i32,
    /// Date the purchase is (to be) made; `None` means today.
    pub purchase_date: Option<NaiveDate>,
}

/// A purchasing request a purchase line is generated from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseRequest {
    /// Product being requested.
    pub product_id: i32,
    /// Requested quantity, expressed in `uom_id`.
    pub quantity: f64,
    /// Unit of measure of the requested quantity.
    pub uom_id: i32,
}

/// A computed purchase document line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseLine {
    /// Product on the line.
    pub product_id: i32,
    /// Ordered quantity, expressed in `uom_id`.
    pub quantity: f64,
    /// Unit of measure of the ordered quantity.
    pub uom_id: i32,
    /// Resolved unit price in the smallest currency unit.
    pub unit_price_cents: i32,
}
