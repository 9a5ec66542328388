use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::domain::purchase::{Purchase, PurchaseRequest};
use crate::forms::supplier_prices::{AddSupplierPriceForm, EditSupplierPriceForm};
use crate::repository::DieselRepository;
use crate::services::context::PriceContext;
use crate::services::{
    ServiceError, pricing as pricing_service, purchases as purchases_service,
    supplier_prices as supplier_prices_service,
};

/// Query parameters common to price listing and resolution: the hub and
/// an optional purchase date overriding today as the reference date.
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub hub_id: i32,
    pub purchase_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct PurchasePriceQuery {
    pub hub_id: i32,
    pub quantity: f64,
    pub uom_id: i32,
    pub purchase_date: Option<NaiveDate>,
}

/// Body of a purchase line computation request.
#[derive(Debug, Deserialize)]
pub struct ComputeLinePayload {
    pub hub_id: i32,
    pub supplier_id: i32,
    pub purchase_date: Option<NaiveDate>,
    pub product_id: i32,
    pub quantity: f64,
    pub uom_id: i32,
}

fn context_for(purchase_date: Option<NaiveDate>) -> PriceContext {
    match purchase_date {
        Some(date) => PriceContext::with_purchase_date(date),
        None => PriceContext::new(),
    }
}

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({"error": "not found"})),
        ServiceError::Form(_) | ServiceError::PricesOverlap { .. } | ServiceError::Uom(_) => {
            HttpResponse::BadRequest().json(json!({"error": err.to_string()}))
        }
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/product_suppliers/{product_supplier_id}/prices")]
/// Return a JSON list of a pairing's price entries with validity flags.
pub async fn api_v1_list_supplier_prices(
    path: web::Path<i32>,
    params: web::Query<PriceQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let ctx = context_for(params.purchase_date);
    match supplier_prices_service::list_supplier_prices(
        repo.get_ref(),
        &ctx,
        params.hub_id,
        path.into_inner(),
    ) {
        Ok(prices) => HttpResponse::Ok().json(prices),
        Err(err) => error_response(err),
    }
}

#[post("/v1/product_suppliers/{product_supplier_id}/prices")]
/// Add a price entry to a pairing.
pub async fn api_v1_add_supplier_price(
    path: web::Path<i32>,
    params: web::Query<PriceQuery>,
    form: web::Json<AddSupplierPriceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_prices_service::create_supplier_price(
        repo.get_ref(),
        params.hub_id,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(price) => HttpResponse::Created().json(price),
        Err(err) => error_response(err),
    }
}

#[put("/v1/prices/{price_id}")]
/// Update an existing price entry.
pub async fn api_v1_update_supplier_price(
    path: web::Path<i32>,
    params: web::Query<PriceQuery>,
    form: web::Json<EditSupplierPriceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_prices_service::update_supplier_price(
        repo.get_ref(),
        params.hub_id,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(price) => HttpResponse::Ok().json(price),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/prices/{price_id}")]
/// Delete a price entry.
pub async fn api_v1_delete_supplier_price(
    path: web::Path<i32>,
    params: web::Query<PriceQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_prices_service::remove_supplier_price(
        repo.get_ref(),
        params.hub_id,
        path.into_inner(),
    ) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[get("/v1/product_suppliers/{product_supplier_id}/purchase_price")]
/// Resolve the unit price for a quantity on the given purchase date.
/// Responds with `unit_price_cents: null` when no tier qualifies.
pub async fn api_v1_purchase_price(
    path: web::Path<i32>,
    params: web::Query<PurchasePriceQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let ctx = context_for(params.purchase_date);
    match pricing_service::get_supplier_price(
        repo.get_ref(),
        &ctx,
        params.hub_id,
        path.into_inner(),
        params.quantity,
        params.uom_id,
    ) {
        Ok(unit_price_cents) => {
            HttpResponse::Ok().json(json!({"unit_price_cents": unit_price_cents}))
        }
        Err(err) => error_response(err),
    }
}

#[post("/v1/purchases/lines")]
/// Compute a priced purchase line for a requested product and quantity.
pub async fn api_v1_compute_purchase_line(
    payload: web::Json<ComputeLinePayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    let purchase = Purchase {
        hub_id: payload.hub_id,
        supplier_id: payload.supplier_id,
        purchase_date: payload.purchase_date,
    };
    let request = PurchaseRequest {
        product_id: payload.product_id,
        quantity: payload.quantity,
        uom_id: payload.uom_id,
    };

    let mut ctx = PriceContext::new();
    match purchases_service::compute_purchase_line(repo.get_ref(), &mut ctx, &purchase, &request) {
        Ok(line) => HttpResponse::Ok().json(line),
        Err(err) => error_response(err),
    }
}
