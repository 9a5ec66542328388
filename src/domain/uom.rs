use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by unit-of-measure conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UomError {
    /// Conversion was attempted across incompatible unit categories.
    #[error("cannot convert between unit categories `{from}` and `{to}`")]
    CategoryMismatch { from: String, to: String },
}

/// Domain representation of a unit of measure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Uom {
    /// Unique identifier of the unit.
    pub id: i32,
    /// Human-readable name, e.g. `Unit` or `Dozen`.
    pub name: String,
    /// Category the unit belongs to; conversions only work within one.
    pub category: String,
    /// Size of this unit expressed in the category's base unit.
    pub factor: f64,
    /// Timestamp for when the unit record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the unit record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new unit of measure.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUom {
    /// Human-readable name.
    pub name: String,
    /// Category the unit belongs to.
    pub category: String,
    /// Size of this unit in the category's base unit.
    pub factor: f64,
}

impl NewUom {
    /// Build a new unit payload.
    pub fn new(name: impl Into<String>, category: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            factor,
        }
    }
}

/// Convert `quantity` expressed in `from` into the equivalent amount in `to`.
pub fn compute_qty(from: &Uom, quantity: f64, to: &Uom) -> Result<f64, UomError> {
    if from.category != to.category {
        return Err(UomError::CategoryMismatch {
            from: from.category.clone(),
            to: to.category.clone(),
        });
    }
    if from.id == to.id {
        return Ok(quantity);
    }
    Ok(quantity * from.factor / to.factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uom(id: i32, name: &str, category: &str, factor: f64) -> Uom {
        Uom {
            id,
            name: name.to_string(),
            category: category.to_string(),
            factor,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn converts_between_units_of_one_category() {
        let unit = uom(1, "Unit", "count", 1.0);
        let dozen = uom(2, "Dozen", "count", 12.0);

        assert_eq!(compute_qty(&dozen, 2.0, &unit), Ok(24.0));
        assert_eq!(compute_qty(&unit, 24.0, &dozen), Ok(2.0));
    }

    #[test]
    fn same_unit_is_identity() {
        let unit = uom(1, "Unit", "count", 1.0);

        assert_eq!(compute_qty(&unit, 7.5, &unit), Ok(7.5));
    }

    #[test]
    fn rejects_cross_category_conversion() {
        let unit = uom(1, "Unit", "count", 1.0);
        let kilogram = uom(3, "Kilogram", "weight", 1.0);

        assert_eq!(
            compute_qty(&unit, 1.0, &kilogram),
            Err(UomError::CategoryMismatch {
                from: "count".to_string(),
                to: "weight".to_string(),
            })
        );
    }
}
