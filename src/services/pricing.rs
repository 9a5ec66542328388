use crate::domain::supplier_price::{PricePattern, SupplierPrice, SupplierPriceListQuery};
use crate::domain::uom::{Uom, UomError, compute_qty};
use crate::repository::{ProductReader, ProductSupplierReader, SupplierPriceReader, UomReader};
use crate::services::context::PriceContext;
use crate::services::{ServiceError, ServiceResult};

/// Resolve the unit price a supplier charges for `quantity` of the paired
/// product on the context's reference date. Returns `None` when no tier
/// qualifies.
///
/// Quantity break thresholds are stored in the product's purchase UOM and
/// converted into `uom_id` before comparison. Among qualifying tiers the
/// largest threshold wins; threshold ties go to the most recently started
/// window, then the most recently ending one.
pub fn get_supplier_price(
    repo: &(impl ProductSupplierReader + ProductReader + UomReader + SupplierPriceReader),
    ctx: &PriceContext,
    hub_id: i32,
    product_supplier_id: i32,
    quantity: f64,
    uom_id: i32,
) -> ServiceResult<Option<i32>> {
    let (purchase_uom, requested_uom) =
        load_uoms(repo, hub_id, product_supplier_id, uom_id)?;

    let prices = repo.list_supplier_prices(
        SupplierPriceListQuery::new(product_supplier_id).valid_on(ctx.reference_date()),
    )?;

    Ok(select_price(
        prices.iter(),
        quantity,
        &purchase_uom,
        &requested_uom,
    )?)
}

/// Like [`get_supplier_price`], but considers only tiers the pattern
/// accepts on the reference date.
pub fn resolve_supplier_price(
    repo: &(impl ProductSupplierReader + ProductReader + UomReader + SupplierPriceReader),
    ctx: &PriceContext,
    hub_id: i32,
    product_supplier_id: i32,
    quantity: f64,
    uom_id: i32,
    pattern: &PricePattern,
) -> ServiceResult<Option<i32>> {
    let (purchase_uom, requested_uom) =
        load_uoms(repo, hub_id, product_supplier_id, uom_id)?;

    let reference_date = ctx.reference_date();
    let prices = repo.list_supplier_prices(SupplierPriceListQuery::new(product_supplier_id))?;

    Ok(select_price(
        prices
            .iter()
            .filter(|price| price.matches(reference_date, pattern)),
        quantity,
        &purchase_uom,
        &requested_uom,
    )?)
}

fn load_uoms(
    repo: &(impl ProductSupplierReader + ProductReader + UomReader),
    hub_id: i32,
    product_supplier_id: i32,
    uom_id: i32,
) -> ServiceResult<(Uom, Uom)> {
    let pairing = repo
        .get_product_supplier_by_id(product_supplier_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;
    let product = repo
        .get_product_by_id(pairing.product_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;
    let purchase_uom = repo
        .get_uom_by_id(product.purchase_uom_id)?
        .ok_or(ServiceError::NotFound)?;
    let requested_uom = repo
        .get_uom_by_id(uom_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok((purchase_uom, requested_uom))
}

fn select_price<'a>(
    prices: impl Iterator<Item = &'a SupplierPrice>,
    quantity: f64,
    purchase_uom: &Uom,
    requested_uom: &Uom,
) -> Result<Option<i32>, UomError> {
    let mut best: Option<(f64, &SupplierPrice)> = None;

    for price in prices {
        let threshold = compute_qty(purchase_uom, price.quantity, requested_uom)?;
        if threshold > quantity {
            continue;
        }

        let replace = match best {
            None => true,
            Some((best_threshold, best_price)) => {
                threshold > best_threshold
                    || (threshold == best_threshold
                        && (price.start_date, price.end_date)
                            > (best_price.start_date, best_price.end_date))
            }
        };
        if replace {
            best = Some((threshold, price));
        }
    }

    Ok(best.map(|(_, price)| price.unit_price_cents))
}
