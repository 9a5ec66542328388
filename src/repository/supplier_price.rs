use diesel::prelude::*;

use crate::{
    domain::supplier_price::{
        NewSupplierPrice as DomainNewSupplierPrice, SupplierPrice as DomainSupplierPrice,
        SupplierPriceListQuery, UpdateSupplierPrice as DomainUpdateSupplierPrice,
    },
    models::supplier_price::{
        NewSupplierPrice as DbNewSupplierPrice, SupplierPrice as DbSupplierPrice,
        UpdateSupplierPrice as DbUpdateSupplierPrice,
    },
    repository::{DieselRepository, RepositoryError, RepositoryResult, SupplierPriceReader,
        SupplierPriceWriter},
};

impl SupplierPriceReader for DieselRepository {
    fn get_supplier_price_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSupplierPrice>> {
        use crate::schema::supplier_prices;

        let mut conn = self.conn()?;
        let price = supplier_prices::table
            .filter(supplier_prices::id.eq(id))
            .first::<DbSupplierPrice>(&mut conn)
            .optional()?;

        Ok(price.map(Into::into))
    }

    fn list_supplier_prices(
        &self,
        query: SupplierPriceListQuery,
    ) -> RepositoryResult<Vec<DomainSupplierPrice>> {
        use crate::schema::supplier_prices;

        let mut conn = self.conn()?;

        let mut items = supplier_prices::table
            .filter(supplier_prices::product_supplier_id.eq(query.product_supplier_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(quantity) = query.quantity {
            items = items.filter(supplier_prices::quantity.eq(quantity));
        }

        if let Some(exclude_id) = query.exclude_id {
            items = items.filter(supplier_prices::id.ne(exclude_id));
        }

        if let Some(date) = query.valid_on {
            items = items
                .filter(
                    supplier_prices::start_date
                        .is_null()
                        .or(supplier_prices::start_date.le(date)),
                )
                .filter(
                    supplier_prices::end_date
                        .is_null()
                        .or(supplier_prices::end_date.ge(date)),
                );
        }

        if let Some(window) = query.overlapping {
            // Mirror of DateWindow::intersects with open bounds: a missing
            // candidate bound drops the corresponding clause entirely.
            if let Some(end) = window.end {
                items = items.filter(
                    supplier_prices::start_date
                        .is_null()
                        .or(supplier_prices::start_date.le(end)),
                );
            }
            if let Some(start) = window.start {
                items = items.filter(
                    supplier_prices::end_date
                        .is_null()
                        .or(supplier_prices::end_date.ge(start)),
                );
            }
        }

        items = items.order((
            supplier_prices::start_date.desc(),
            supplier_prices::end_date.desc(),
        ));

        let db_prices = items.load::<DbSupplierPrice>(&mut conn)?;

        Ok(db_prices.into_iter().map(Into::into).collect())
    }
}

impl SupplierPriceWriter for DieselRepository {
    fn create_supplier_price(
        &self,
        new_price: &DomainNewSupplierPrice,
    ) -> RepositoryResult<DomainSupplierPrice> {
        use crate::schema::supplier_prices;

        let mut conn = self.conn()?;
        let db_new = DbNewSupplierPrice::from(new_price);

        let created = diesel::insert_into(supplier_prices::table)
            .values(&db_new)
            .get_result::<DbSupplierPrice>(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier_price(
        &self,
        price_id: i32,
        updates: &DomainUpdateSupplierPrice,
    ) -> RepositoryResult<DomainSupplierPrice> {
        use crate::schema::supplier_prices;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateSupplierPrice::from(updates);

        let target = supplier_prices::table.filter(supplier_prices::id.eq(price_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbSupplierPrice>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier_price(&self, price_id: i32) -> RepositoryResult<()> {
        use crate::schema::supplier_prices;

        let mut conn = self.conn()?;

        let target = supplier_prices::table.filter(supplier_prices::id.eq(price_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
