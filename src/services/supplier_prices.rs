use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::product_supplier::ProductSupplier;
use crate::domain::supplier_price::{DateWindow, SupplierPrice, SupplierPriceListQuery};
use crate::forms::supplier_prices::{AddSupplierPriceForm, EditSupplierPriceForm};
use crate::repository::{
    ProductSupplierReader, SupplierPriceReader, SupplierPriceWriter, SupplierReader,
};
use crate::services::context::PriceContext;
use crate::services::{ServiceError, ServiceResult};

/// Price entry shaped for API responses: the raw tier plus a formatted
/// price and the validity verdict for the context's reference date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SupplierPriceView {
    pub id: i32,
    pub product_supplier_id: i32,
    pub quantity: f64,
    pub unit_price_cents: i32,
    pub unit_price: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub valid: bool,
}

impl SupplierPriceView {
    fn from_price(price: &SupplierPrice, reference_date: NaiveDate) -> Self {
        Self {
            id: price.id,
            product_supplier_id: price.product_supplier_id,
            quantity: price.quantity,
            unit_price_cents: price.unit_price_cents,
            unit_price: price.unit_price_formatted(),
            start_date: price.start_date,
            end_date: price.end_date,
            valid: price.is_valid_on(reference_date),
        }
    }
}

/// List every price entry of a pairing, newest window first.
pub fn list_supplier_prices(
    repo: &(impl ProductSupplierReader + SupplierPriceReader),
    ctx: &PriceContext,
    hub_id: i32,
    product_supplier_id: i32,
) -> ServiceResult<Vec<SupplierPriceView>> {
    let pairing = repo
        .get_product_supplier_by_id(product_supplier_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    let prices = repo.list_supplier_prices(SupplierPriceListQuery::new(pairing.id))?;
    let reference_date = ctx.reference_date();

    Ok(prices
        .iter()
        .map(|price| SupplierPriceView::from_price(price, reference_date))
        .collect())
}

/// Add a price entry to a pairing, rejecting date windows that overlap an
/// existing entry of the same quantity tier.
pub fn create_supplier_price(
    repo: &(impl ProductSupplierReader + SupplierReader + SupplierPriceReader + SupplierPriceWriter),
    hub_id: i32,
    product_supplier_id: i32,
    form: AddSupplierPriceForm,
) -> ServiceResult<SupplierPrice> {
    let pairing = repo
        .get_product_supplier_by_id(product_supplier_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    let new_price = form
        .into_new_supplier_price(pairing.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_no_overlap(
        repo,
        &pairing,
        new_price.quantity,
        new_price.window(),
        new_price.unit_price_cents,
        None,
    )?;

    Ok(repo.create_supplier_price(&new_price)?)
}

/// Update an existing price entry, re-checking the overlap rule against
/// its siblings.
pub fn update_supplier_price(
    repo: &(impl ProductSupplierReader + SupplierReader + SupplierPriceReader + SupplierPriceWriter),
    hub_id: i32,
    price_id: i32,
    form: EditSupplierPriceForm,
) -> ServiceResult<SupplierPrice> {
    let price = repo
        .get_supplier_price_by_id(price_id)?
        .ok_or(ServiceError::NotFound)?;
    let pairing = repo
        .get_product_supplier_by_id(price.product_supplier_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    let updates = form
        .into_update_supplier_price()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_no_overlap(
        repo,
        &pairing,
        updates.quantity,
        updates.window(),
        updates.unit_price_cents,
        Some(price_id),
    )?;

    Ok(repo.update_supplier_price(price_id, &updates)?)
}

/// Delete a price entry after checking it belongs to the hub.
pub fn remove_supplier_price(
    repo: &(impl ProductSupplierReader + SupplierPriceReader + SupplierPriceWriter),
    hub_id: i32,
    price_id: i32,
) -> ServiceResult<()> {
    let price = repo
        .get_supplier_price_by_id(price_id)?
        .ok_or(ServiceError::NotFound)?;
    repo.get_product_supplier_by_id(price.product_supplier_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(repo.delete_supplier_price(price_id)?)
}

fn ensure_no_overlap(
    repo: &(impl SupplierPriceReader + SupplierReader),
    pairing: &ProductSupplier,
    quantity: f64,
    window: DateWindow,
    candidate_price_cents: i32,
    exclude_id: Option<i32>,
) -> ServiceResult<()> {
    let mut query = SupplierPriceListQuery::new(pairing.id)
        .quantity(quantity)
        .overlapping(window);
    if let Some(id) = exclude_id {
        query = query.exclude(id);
    }

    let conflicts = repo.list_supplier_prices(query)?;
    let Some(existing) = conflicts.first() else {
        return Ok(());
    };

    let supplier = repo
        .get_supplier_by_id(pairing.supplier_id, pairing.hub_id)?
        .map(|supplier| supplier.name)
        .unwrap_or_else(|| format!("#{}", pairing.supplier_id));

    Err(ServiceError::PricesOverlap {
        first: format_cents(candidate_price_cents),
        second: existing.unit_price_formatted(),
        supplier,
    })
}

fn format_cents(cents: i32) -> String {
    format!("{:.2}", f64::from(cents) / 100.0)
}
