use diesel::prelude::*;

use crate::{
    domain::uom::{NewUom as DomainNewUom, Uom as DomainUom},
    models::uom::{NewUom as DbNewUom, Uom as DbUom},
    repository::{DieselRepository, RepositoryResult, UomReader, UomWriter},
};

impl UomReader for DieselRepository {
    fn get_uom_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUom>> {
        use crate::schema::uoms;

        let mut conn = self.conn()?;
        let uom = uoms::table
            .filter(uoms::id.eq(id))
            .first::<DbUom>(&mut conn)
            .optional()?;

        Ok(uom.map(Into::into))
    }
}

impl UomWriter for DieselRepository {
    fn create_uom(&self, new_uom: &DomainNewUom) -> RepositoryResult<DomainUom> {
        use crate::schema::uoms;

        let mut conn = self.conn()?;
        let db_new = DbNewUom::from(new_uom);

        let created = diesel::insert_into(uoms::table)
            .values(&db_new)
            .get_result::<DbUom>(&mut conn)?;

        Ok(created.into())
    }
}
