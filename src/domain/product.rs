use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a purchasable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional stock keeping unit identifier.
    pub sku: Option<String>,
    /// Default list cost in the smallest currency unit; used when no
    /// supplier price applies.
    pub list_price_cents: i32,
    /// ISO 4217 currency code associated with the product price.
    pub currency: String,
    /// Unit of measure supplier price quantities are stored in.
    pub purchase_uom_id: i32,
    /// Flag indicating whether the product has been archived.
    pub is_archived: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product for a hub.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional stock keeping unit identifier.
    pub sku: Option<String>,
    /// Default list cost in the smallest currency unit.
    pub list_price_cents: i32,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Unit of measure supplier price quantities are stored in.
    pub purchase_uom_id: i32,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(
        hub_id: i32,
        name: impl Into<String>,
        list_price_cents: i32,
        currency: impl Into<String>,
        purchase_uom_id: i32,
    ) -> Self {
        Self {
            hub_id,
            name: name.into(),
            sku: None,
            list_price_cents,
            currency: currency.into(),
            purchase_uom_id,
        }
    }

    /// Attach an SKU identifier to the product payload.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }
}
