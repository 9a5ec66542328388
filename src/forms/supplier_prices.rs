use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::supplier_price::{NewSupplierPrice, UpdateSupplierPrice};

/// Errors produced while turning a submitted form into a domain payload.
#[derive(Debug, Error)]
pub enum SupplierPriceFormError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("unit price is not a valid amount")]
    InvalidPrice,
    #[error("start date is after end date")]
    StartAfterEnd,
}

/// Form payload for adding a price entry to a product/supplier pairing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddSupplierPriceForm {
    /// Quantity break threshold, in the product's purchase UOM.
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    /// Unit price as a decimal string, e.g. `12.99`.
    #[validate(length(min = 1))]
    pub unit_price: String,
    /// Optional first day of validity.
    pub start_date: Option<NaiveDate>,
    /// Optional last day of validity.
    pub end_date: Option<NaiveDate>,
}

impl AddSupplierPriceForm {
    /// Validate the form and convert it into an insertable payload.
    pub fn into_new_supplier_price(
        self,
        product_supplier_id: i32,
    ) -> Result<NewSupplierPrice, SupplierPriceFormError> {
        self.validate()?;
        let unit_price_cents = parse_price_cents(&self.unit_price)?;

        let mut payload = NewSupplierPrice::new(product_supplier_id, self.quantity, unit_price_cents);
        if let Some(start_date) = self.start_date {
            payload = payload.with_start_date(start_date);
        }
        if let Some(end_date) = self.end_date {
            payload = payload.with_end_date(end_date);
        }

        if !payload.window().is_ordered() {
            return Err(SupplierPriceFormError::StartAfterEnd);
        }

        Ok(payload)
    }
}

/// Form payload for editing an existing price entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditSupplierPriceForm {
    /// New quantity break threshold.
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    /// New unit price as a decimal string.
    #[validate(length(min = 1))]
    pub unit_price: String,
    /// New first day of validity; omitting it clears the bound.
    pub start_date: Option<NaiveDate>,
    /// New last day of validity; omitting it clears the bound.
    pub end_date: Option<NaiveDate>,
}

impl EditSupplierPriceForm {
    /// Validate the form and convert it into an update patch.
    pub fn into_update_supplier_price(
        self,
    ) -> Result<UpdateSupplierPrice, SupplierPriceFormError> {
        self.validate()?;
        let unit_price_cents = parse_price_cents(&self.unit_price)?;

        let updates = UpdateSupplierPrice::new(
            self.quantity,
            unit_price_cents,
            self.start_date,
            self.end_date,
        );

        if !updates.window().is_ordered() {
            return Err(SupplierPriceFormError::StartAfterEnd);
        }

        Ok(updates)
    }
}

fn parse_price_cents(unit_price: &str) -> Result<i32, SupplierPriceFormError> {
    let amount: f64 = unit_price
        .trim()
        .parse()
        .map_err(|_| SupplierPriceFormError::InvalidPrice)?;
    let cents = amount * 100.0;
    // The cast saturates, so amounts past i32 cents must be rejected here.
    if !amount.is_finite() || amount < 0.0 || cents > f64::from(i32::MAX) {
        return Err(SupplierPriceFormError::InvalidPrice);
    }
    Ok(cents.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn add_form(quantity: f64, unit_price: &str) -> AddSupplierPriceForm {
        AddSupplierPriceForm {
            quantity,
            unit_price: unit_price.to_string(),
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn add_form_converts_to_payload() {
        let form = AddSupplierPriceForm {
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 6, 30)),
            ..add_form(5.0, "12.99")
        };

        let payload = form.into_new_supplier_price(3).expect("valid form");

        assert_eq!(payload.product_supplier_id, 3);
        assert_eq!(payload.quantity, 5.0);
        assert_eq!(payload.unit_price_cents, 1299);
        assert_eq!(payload.start_date, Some(date(2024, 1, 1)));
        assert_eq!(payload.end_date, Some(date(2024, 6, 30)));
    }

    #[test]
    fn add_form_rejects_negative_quantity() {
        let result = add_form(-1.0, "10.00").into_new_supplier_price(3);

        assert!(matches!(result, Err(SupplierPriceFormError::Validation(_))));
    }

    #[test]
    fn add_form_rejects_unparseable_price() {
        let result = add_form(1.0, "ten dollars").into_new_supplier_price(3);

        assert!(matches!(result, Err(SupplierPriceFormError::InvalidPrice)));
    }

    #[test]
    fn add_form_rejects_negative_price() {
        let result = add_form(1.0, "-5.00").into_new_supplier_price(3);

        assert!(matches!(result, Err(SupplierPriceFormError::InvalidPrice)));
    }

    #[test]
    fn add_form_rejects_prices_past_the_cent_range() {
        for price in ["99999999999.00", "21474836.48", "inf"] {
            let result = add_form(1.0, price).into_new_supplier_price(3);

            assert!(
                matches!(result, Err(SupplierPriceFormError::InvalidPrice)),
                "{price} should not fit in cents"
            );
        }
    }

    #[test]
    fn add_form_accepts_large_in_range_prices() {
        let payload = add_form(1.0, "20000000.00")
            .into_new_supplier_price(3)
            .expect("price fits in cents");

        assert_eq!(payload.unit_price_cents, 2_000_000_000);
    }

    #[test]
    fn add_form_rejects_reversed_dates() {
        let form = AddSupplierPriceForm {
            start_date: Some(date(2024, 6, 30)),
            end_date: Some(date(2024, 1, 1)),
            ..add_form(1.0, "10.00")
        };

        let result = form.into_new_supplier_price(3);

        assert!(matches!(result, Err(SupplierPriceFormError::StartAfterEnd)));
    }

    #[test]
    fn edit_form_clears_omitted_bounds() {
        let form = EditSupplierPriceForm {
            quantity: 2.0,
            unit_price: "8.50".to_string(),
            start_date: None,
            end_date: None,
        };

        let updates = form.into_update_supplier_price().expect("valid form");

        assert_eq!(updates.quantity, 2.0);
        assert_eq!(updates.unit_price_cents, 850);
        assert_eq!(updates.start_date, None);
        assert_eq!(updates.end_date, None);
    }

    #[test]
    fn single_boundary_day_window_is_accepted() {
        let form = AddSupplierPriceForm {
            start_date: Some(date(2024, 3, 1)),
            end_date: Some(date(2024, 3, 1)),
            ..add_form(0.0, "1.00")
        };

        assert!(form.into_new_supplier_price(1).is_ok());
    }
}
