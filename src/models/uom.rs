use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::uom::{NewUom as DomainNewUom, Uom as DomainUom};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::uoms)]
pub struct Uom {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub factor: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::uoms)]
pub struct NewUom<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub factor: f64,
}

impl From<Uom> for DomainUom {
    fn from(value: Uom) -> Self {
        Self {
            id: value.id,
            name: value.name,
            category: value.category,
            factor: value.factor,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUom> for NewUom<'a> {
    fn from(value: &'a DomainNewUom) -> Self {
        Self {
            name: value.name.as_str(),
            category: value.category.as_str(),
            factor: value.factor,
        }
    }
}
