use mockall::mock;

use super::{
    ProductReader, ProductSupplierReader, ProductSupplierWriter, ProductWriter, RepositoryResult,
    SupplierPriceReader, SupplierPriceWriter, SupplierReader, SupplierWriter, UomReader, UomWriter,
};
use crate::domain::{
    product::{NewProduct, Product},
    product_supplier::{NewProductSupplier, ProductSupplier},
    supplier::{NewSupplier, Supplier},
    supplier_price::{
        NewSupplierPrice, SupplierPrice, SupplierPriceListQuery, UpdateSupplierPrice,
    },
    uom::{NewUom, Uom},
};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    }

    impl SupplierReader for Repository {
        fn get_supplier_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Supplier>>;
    }

    impl SupplierWriter for Repository {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    }

    impl ProductSupplierReader for Repository {
        fn get_product_supplier_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<ProductSupplier>>;
        fn get_product_supplier(&self, product_id: i32, supplier_id: i32, hub_id: i32) -> RepositoryResult<Option<ProductSupplier>>;
    }

    impl ProductSupplierWriter for Repository {
        fn create_product_supplier(&self, new_product_supplier: &NewProductSupplier) -> RepositoryResult<ProductSupplier>;
    }

    impl UomReader for Repository {
        fn get_uom_by_id(&self, id: i32) -> RepositoryResult<Option<Uom>>;
    }

    impl UomWriter for Repository {
        fn create_uom(&self, new_uom: &NewUom) -> RepositoryResult<Uom>;
    }

    impl SupplierPriceReader for Repository {
        fn get_supplier_price_by_id(&self, id: i32) -> RepositoryResult<Option<SupplierPrice>>;
        fn list_supplier_prices(&self, query: SupplierPriceListQuery) -> RepositoryResult<Vec<SupplierPrice>>;
    }

    impl SupplierPriceWriter for Repository {
        fn create_supplier_price(&self, new_price: &NewSupplierPrice) -> RepositoryResult<SupplierPrice>;
        fn update_supplier_price(&self, price_id: i32, updates: &UpdateSupplierPrice) -> RepositoryResult<SupplierPrice>;
        fn delete_supplier_price(&self, price_id: i32) -> RepositoryResult<()>;
    }
}
