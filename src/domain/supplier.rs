use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a supplier party.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    /// Unique identifier of the supplier.
    pub id: i32,
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Display name used in messages and views.
    pub name: String,
    /// Optional contact email address.
    pub email: Option<String>,
    /// Timestamp for when the supplier record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the supplier record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new supplier for a hub.
#[derive(Debug, Clone)]
pub struct NewSupplier {
    /// Owning hub identifier.
    pub hub_id: i32,
    /// Display name used in messages and views.
    pub name: String,
    /// Optional contact email address.
    pub email: Option<String>,
}

impl NewSupplier {
    /// Build a new supplier payload.
    pub fn new(hub_id: i32, name: impl Into<String>) -> Self {
        Self {
            hub_id,
            name: name.into(),
            email: None,
        }
    }

    /// Attach a contact email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
