use diesel::prelude::*;

use crate::{
    domain::product_supplier::{
        NewProductSupplier as DomainNewProductSupplier, ProductSupplier as DomainProductSupplier,
    },
    models::product_supplier::{
        NewProductSupplier as DbNewProductSupplier, ProductSupplier as DbProductSupplier,
    },
    repository::{
        DieselRepository, ProductSupplierReader, ProductSupplierWriter, RepositoryResult,
    },
};

impl ProductSupplierReader for DieselRepository {
    fn get_product_supplier_by_id(
        &self,
        id: i32,
        hub_id: i32,
    ) -> RepositoryResult<Option<DomainProductSupplier>> {
        use crate::schema::product_suppliers;

        let mut conn = self.conn()?;
        let pairing = product_suppliers::table
            .filter(product_suppliers::id.eq(id))
            .filter(product_suppliers::hub_id.eq(hub_id))
            .first::<DbProductSupplier>(&mut conn)
            .optional()?;

        Ok(pairing.map(Into::into))
    }

    fn get_product_supplier(
        &self,
        product_id: i32,
        supplier_id: i32,
        hub_id: i32,
    ) -> RepositoryResult<Option<DomainProductSupplier>> {
        use crate::schema::product_suppliers;

        let mut conn = self.conn()?;
        let pairing = product_suppliers::table
            .filter(product_suppliers::product_id.eq(product_id))
            .filter(product_suppliers::supplier_id.eq(supplier_id))
            .filter(product_suppliers::hub_id.eq(hub_id))
            .first::<DbProductSupplier>(&mut conn)
            .optional()?;

        Ok(pairing.map(Into::into))
    }
}

impl ProductSupplierWriter for DieselRepository {
    fn create_product_supplier(
        &self,
        new_product_supplier: &DomainNewProductSupplier,
    ) -> RepositoryResult<DomainProductSupplier> {
        use crate::schema::product_suppliers;

        let mut conn = self.conn()?;
        let db_new = DbNewProductSupplier::from(new_product_supplier);

        let created = diesel::insert_into(product_suppliers::table)
            .values(&db_new)
            .get_result::<DbProductSupplier>(&mut conn)?;

        Ok(created.into())
    }
}
