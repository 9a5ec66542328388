use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::supplier_price::{
    NewSupplierPrice as DomainNewSupplierPrice, SupplierPrice as DomainSupplierPrice,
    UpdateSupplierPrice as DomainUpdateSupplierPrice,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::supplier_prices,
    belongs_to(super::product_supplier::ProductSupplier, foreign_key = product_supplier_id)
)]
pub struct SupplierPrice {
    pub id: i32,
    pub product_supplier_id: i32,
    pub quantity: f64,
    pub unit_price_cents: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::supplier_prices)]
pub struct NewSupplierPrice {
    pub product_supplier_id: i32,
    pub quantity: f64,
    pub unit_price_cents: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::supplier_prices)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateSupplierPrice {
    pub quantity: f64,
    pub unit_price_cents: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl From<SupplierPrice> for DomainSupplierPrice {
    fn from(value: SupplierPrice) -> Self {
        Self {
            id: value.id,
            product_supplier_id: value.product_supplier_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
            start_date: value.start_date,
            end_date: value.end_date,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewSupplierPrice> for NewSupplierPrice {
    fn from(value: &DomainNewSupplierPrice) -> Self {
        Self {
            product_supplier_id: value.product_supplier_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
            start_date: value.start_date,
            end_date: value.end_date,
        }
    }
}

impl From<&DomainUpdateSupplierPrice> for UpdateSupplierPrice {
    fn from(value: &DomainUpdateSupplierPrice) -> Self {
        Self {
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
            start_date: value.start_date,
            end_date: value.end_date,
            updated_at: value.updated_at,
        }
    }
}
