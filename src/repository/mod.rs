use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product};
use crate::domain::product_supplier::{NewProductSupplier, ProductSupplier};
use crate::domain::supplier::{NewSupplier, Supplier};
use crate::domain::supplier_price::{
    NewSupplierPrice, SupplierPrice, SupplierPriceListQuery, UpdateSupplierPrice,
};
use crate::domain::uom::{NewUom, Uom};

pub mod errors;
pub mod product;
pub mod product_supplier;
pub mod supplier;
pub mod supplier_price;
pub mod uom;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
}

/// Read-only operations over supplier records.
pub trait SupplierReader {
    fn get_supplier_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Supplier>>;
}

/// Write operations over supplier records.
pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
}

/// Read-only operations over product/supplier pairings.
pub trait ProductSupplierReader {
    fn get_product_supplier_by_id(
        &self,
        id: i32,
        hub_id: i32,
    ) -> RepositoryResult<Option<ProductSupplier>>;
    fn get_product_supplier(
        &self,
        product_id: i32,
        supplier_id: i32,
        hub_id: i32,
    ) -> RepositoryResult<Option<ProductSupplier>>;
}

/// Write operations over product/supplier pairings.
pub trait ProductSupplierWriter {
    fn create_product_supplier(
        &self,
        new_product_supplier: &NewProductSupplier,
    ) -> RepositoryResult<ProductSupplier>;
}

/// Read-only operations over units of measure.
pub trait UomReader {
    fn get_uom_by_id(&self, id: i32) -> RepositoryResult<Option<Uom>>;
}

/// Write operations over units of measure.
pub trait UomWriter {
    fn create_uom(&self, new_uom: &NewUom) -> RepositoryResult<Uom>;
}

/// Read-only operations over supplier price entries.
pub trait SupplierPriceReader {
    fn get_supplier_price_by_id(&self, id: i32) -> RepositoryResult<Option<SupplierPrice>>;
    /// List entries matching `query`, ordered by start date descending then
    /// end date descending.
    fn list_supplier_prices(
        &self,
        query: SupplierPriceListQuery,
    ) -> RepositoryResult<Vec<SupplierPrice>>;
}

/// Write operations over supplier price entries.
pub trait SupplierPriceWriter {
    fn create_supplier_price(
        &self,
        new_price: &NewSupplierPrice,
    ) -> RepositoryResult<SupplierPrice>;
    fn update_supplier_price(
        &self,
        price_id: i32,
        updates: &UpdateSupplierPrice,
    ) -> RepositoryResult<SupplierPrice>;
    fn delete_supplier_price(&self, price_id: i32) -> RepositoryResult<()>;
}
