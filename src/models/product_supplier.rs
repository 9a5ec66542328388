use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_supplier::{
    NewProductSupplier as DomainNewProductSupplier, ProductSupplier as DomainProductSupplier,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product_suppliers,
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::supplier::Supplier, foreign_key = supplier_id)
)]
pub struct ProductSupplier {
    pub id: i32,
    pub hub_id: i32,
    pub product_id: i32,
    pub supplier_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_suppliers)]
pub struct NewProductSupplier {
    pub hub_id: i32,
    pub product_id: i32,
    pub supplier_id: i32,
}

impl From<ProductSupplier> for DomainProductSupplier {
    fn from(value: ProductSupplier) -> Self {
        Self {
            id: value.id,
            hub_id: value.hub_id,
            product_id: value.product_id,
            supplier_id: value.supplier_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewProductSupplier> for NewProductSupplier {
    fn from(value: &DomainNewProductSupplier) -> Self {
        Self {
            hub_id: value.hub_id,
            product_id: value.product_id,
            supplier_id: value.supplier_id,
        }
    }
}
