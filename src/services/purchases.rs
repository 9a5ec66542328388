use crate::domain::purchase::{Purchase, PurchaseLine, PurchaseRequest};
use crate::repository::{ProductReader, ProductSupplierReader, SupplierPriceReader, UomReader};
use crate::services::context::PriceContext;
use crate::services::pricing::get_supplier_price;
use crate::services::{ServiceError, ServiceResult};

/// Build a purchase document line for a request, pricing it with the
/// purchase's date. The context's purchase date is overridden for the
/// duration of the computation and restored afterwards, also when the
/// computation fails.
///
/// Falls back to the product's list price when the supplier has no
/// pairing for the product or no tier qualifies.
pub fn compute_purchase_line(
    repo: &(impl ProductSupplierReader + ProductReader + UomReader + SupplierPriceReader),
    ctx: &mut PriceContext,
    purchase: &Purchase,
    request: &PurchaseRequest,
) -> ServiceResult<PurchaseLine> {
    let ctx = ctx.scoped_purchase_date(purchase.purchase_date);

    let product = repo
        .get_product_by_id(request.product_id, purchase.hub_id)?
        .ok_or(ServiceError::NotFound)?;
    let pairing = repo.get_product_supplier(
        request.product_id,
        purchase.supplier_id,
        purchase.hub_id,
    )?;

    let unit_price_cents = match pairing {
        Some(pairing) => get_supplier_price(
            repo,
            &ctx,
            purchase.hub_id,
            pairing.id,
            request.quantity,
            request.uom_id,
        )?
        .unwrap_or(product.list_price_cents),
        None => product.list_price_cents,
    };

    Ok(PurchaseLine {
        product_id: request.product_id,
        quantity: request.quantity,
        uom_id: request.uom_id,
        unit_price_cents,
    })
}
