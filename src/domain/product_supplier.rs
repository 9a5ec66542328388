use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::supplier_price::PricePattern;

/// Domain representation of a product/supplier pairing. Owns the supplier
/// price entries for that product from that supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSupplier {
    /// Unique identifier of the pairing.
    pub id: i32,
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Product being supplied.
    pub product_id: i32,
    /// Supplier offering the product.
    pub supplier_id: i32,
    /// Timestamp for when the pairing was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the pairing.
    pub updated_at: NaiveDateTime,
}

impl ProductSupplier {
    /// Pattern matching any of this pairing's price entries, with no
    /// constraints beyond ownership.
    pub fn price_pattern(&self) -> PricePattern {
        PricePattern::default().product_supplier(self.id)
    }
}

/// Payload required to insert a new product/supplier pairing.
#[derive(Debug, Clone)]
pub struct NewProductSupplier {
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Product being supplied.
    pub product_id: i32,
    /// Supplier offering the product.
    pub supplier_id: i32,
}

impl NewProductSupplier {
    /// Build a new pairing payload.
    pub fn new(hub_id: i32, product_id: i32, supplier_id: i32) -> Self {
        Self {
            hub_id,
            product_id,
            supplier_id,
        }
    }
}
