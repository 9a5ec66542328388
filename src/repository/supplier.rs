use diesel::prelude::*;

use crate::{
    domain::supplier::{NewSupplier as DomainNewSupplier, Supplier as DomainSupplier},
    models::supplier::{NewSupplier as DbNewSupplier, Supplier as DbSupplier},
    repository::{DieselRepository, RepositoryResult, SupplierReader, SupplierWriter},
};

impl SupplierReader for DieselRepository {
    fn get_supplier_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let supplier = suppliers::table
            .filter(suppliers::id.eq(id))
            .filter(suppliers::hub_id.eq(hub_id))
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(Into::into))
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(
        &self,
        new_supplier: &DomainNewSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let db_new = DbNewSupplier::from(new_supplier);

        let created = diesel::insert_into(suppliers::table)
            .values(&db_new)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }
}
