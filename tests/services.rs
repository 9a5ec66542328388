use chrono::{Days, NaiveDate};

use supplier_pricing::domain::product::NewProduct;
use supplier_pricing::domain::product_supplier::NewProductSupplier;
use supplier_pricing::domain::purchase::{Purchase, PurchaseRequest};
use supplier_pricing::domain::supplier::NewSupplier;
use supplier_pricing::domain::supplier_price::{NewSupplierPrice, SupplierPriceListQuery};
use supplier_pricing::domain::uom::NewUom;
use supplier_pricing::forms::supplier_prices::{AddSupplierPriceForm, EditSupplierPriceForm};
use supplier_pricing::repository::{
    DieselRepository, ProductSupplierReader, ProductSupplierWriter, ProductWriter,
    SupplierPriceReader, SupplierPriceWriter, SupplierWriter, UomWriter,
};
use supplier_pricing::services::context::PriceContext;
use supplier_pricing::services::{ServiceError, pricing, purchases, supplier_prices};

mod common;

const HUB_ID: i32 = 1;

struct Fixture {
    product_id: i32,
    supplier_id: i32,
    pairing_id: i32,
    unit_uom_id: i32,
    dozen_uom_id: i32,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn seed(repo: &DieselRepository) -> Fixture {
    let unit = repo.create_uom(&NewUom::new("Unit", "count", 1.0)).unwrap();
    let dozen = repo
        .create_uom(&NewUom::new("Dozen", "count", 12.0))
        .unwrap();
    let product = repo
        .create_product(&NewProduct::new(HUB_ID, "Widget", 1500, "USD", unit.id))
        .unwrap();
    let supplier = repo
        .create_supplier(&NewSupplier::new(HUB_ID, "Acme Trading"))
        .unwrap();
    let pairing = repo
        .create_product_supplier(&NewProductSupplier::new(HUB_ID, product.id, supplier.id))
        .unwrap();

    Fixture {
        product_id: product.id,
        supplier_id: supplier.id,
        pairing_id: pairing.id,
        unit_uom_id: unit.id,
        dozen_uom_id: dozen.id,
    }
}

fn add_form(
    quantity: f64,
    unit_price: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AddSupplierPriceForm {
    AddSupplierPriceForm {
        quantity,
        unit_price: unit_price.to_string(),
        start_date: start,
        end_date: end,
    }
}

#[test]
fn test_overlapping_windows_are_rejected_with_both_prices_named() {
    let test_db = common::TestDb::new("test_services_overlap_rejected.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(5.0, "9.99", Some(date(2024, 6, 1)), Some(date(2024, 6, 30))),
    )
    .unwrap();

    // Shares 2024-06-30 with the existing window.
    let err = supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(5.0, "12.50", Some(date(2024, 6, 30)), Some(date(2024, 7, 31))),
    )
    .expect_err("shared boundary day must be rejected");

    match &err {
        ServiceError::PricesOverlap {
            first,
            second,
            supplier,
        } => {
            assert_eq!(first, "12.50");
            assert_eq!(second, "9.99");
            assert_eq!(supplier, "Acme Trading");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "the prices \"12.50\" and \"9.99\" for supplier \"Acme Trading\" overlap"
    );

    // The day after the window is fine.
    supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(5.0, "12.50", Some(date(2024, 7, 1)), Some(date(2024, 7, 31))),
    )
    .unwrap();
}

#[test]
fn test_undated_entries_conflict_with_everything_in_their_tier() {
    let test_db = common::TestDb::new("test_services_undated_conflict.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(0.0, "10.00", None, None),
    )
    .unwrap();

    let err = supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(0.0, "9.00", Some(date(2030, 1, 1)), Some(date(2030, 12, 31))),
    )
    .expect_err("an open window reaches every date");
    assert!(matches!(err, ServiceError::PricesOverlap { .. }));

    // A different quantity tier is unaffected.
    supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(10.0, "9.00", None, None),
    )
    .unwrap();
}

#[test]
fn test_reversed_dates_are_rejected() {
    let test_db = common::TestDb::new("test_services_reversed_dates.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    let err = supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(0.0, "10.00", Some(date(2024, 6, 30)), Some(date(2024, 6, 1))),
    )
    .expect_err("start after end must be rejected");
    assert!(matches!(err, ServiceError::Form(_)));
}

#[test]
fn test_editing_an_entry_does_not_conflict_with_itself() {
    let test_db = common::TestDb::new("test_services_edit_self.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    let created = supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(5.0, "9.99", Some(date(2024, 6, 1)), Some(date(2024, 6, 30))),
    )
    .unwrap();

    let updated = supplier_prices::update_supplier_price(
        &repo,
        HUB_ID,
        created.id,
        EditSupplierPriceForm {
            quantity: 5.0,
            unit_price: "9.49".to_string(),
            start_date: Some(date(2024, 6, 1)),
            end_date: Some(date(2024, 7, 31)),
        },
    )
    .unwrap();

    assert_eq!(updated.unit_price_cents, 949);
    assert_eq!(updated.end_date, Some(date(2024, 7, 31)));
}

#[test]
fn test_quantity_breaks_select_the_largest_qualifying_tier() {
    let test_db = common::TestDb::new("test_services_quantity_breaks.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 0.0, 1000))
        .unwrap();
    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 5.0, 800))
        .unwrap();
    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 50.0, 600))
        .unwrap();

    let ctx = PriceContext::with_purchase_date(date(2024, 6, 15));
    let at = |qty: f64| {
        pricing::get_supplier_price(&repo, &ctx, HUB_ID, fx.pairing_id, qty, fx.unit_uom_id)
            .unwrap()
    };

    assert_eq!(at(1.0), Some(1000));
    assert_eq!(at(5.0), Some(800));
    assert_eq!(at(49.0), Some(800));
    assert_eq!(at(50.0), Some(600));
}

#[test]
fn test_dated_entry_overrides_undated_one_inside_its_window() {
    let test_db = common::TestDb::new("test_services_dated_override.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    let today = chrono::Local::now().date_naive();
    let window_start = today.checked_sub_days(Days::new(10)).unwrap();
    let window_end = today.checked_sub_days(Days::new(1)).unwrap();
    let inside = today.checked_sub_days(Days::new(5)).unwrap();

    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 0.0, 1000))
        .unwrap();
    repo.create_supplier_price(
        &NewSupplierPrice::new(fx.pairing_id, 0.0, 1200)
            .with_start_date(window_start)
            .with_end_date(window_end),
    )
    .unwrap();

    let dated_ctx = PriceContext::with_purchase_date(inside);
    let resolved =
        pricing::get_supplier_price(&repo, &dated_ctx, HUB_ID, fx.pairing_id, 1.0, fx.unit_uom_id)
            .unwrap();
    assert_eq!(resolved, Some(1200));

    // Without a purchase date the window has already expired.
    let today_ctx = PriceContext::new();
    let resolved =
        pricing::get_supplier_price(&repo, &today_ctx, HUB_ID, fx.pairing_id, 1.0, fx.unit_uom_id)
            .unwrap();
    assert_eq!(resolved, Some(1000));
}

#[test]
fn test_thresholds_convert_into_the_requested_uom() {
    let test_db = common::TestDb::new("test_services_uom_conversion.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 0.0, 1000))
        .unwrap();
    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 12.0, 900))
        .unwrap();

    let ctx = PriceContext::with_purchase_date(date(2024, 6, 15));
    let resolved =
        pricing::get_supplier_price(&repo, &ctx, HUB_ID, fx.pairing_id, 1.0, fx.dozen_uom_id)
            .unwrap();

    assert_eq!(resolved, Some(900));
}

#[test]
fn test_pairing_pattern_matches_exactly_the_valid_entries() {
    let test_db = common::TestDb::new("test_services_pairing_pattern.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    let undated = repo
        .create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 0.0, 1000))
        .unwrap();
    repo.create_supplier_price(
        &NewSupplierPrice::new(fx.pairing_id, 5.0, 800).with_end_date(date(2024, 1, 31)),
    )
    .unwrap();

    let pairing = repo
        .get_product_supplier_by_id(fx.pairing_id, HUB_ID)
        .unwrap()
        .expect("pairing exists");
    let pattern = pairing.price_pattern();
    let reference = date(2024, 6, 15);

    let entries = repo
        .list_supplier_prices(SupplierPriceListQuery::new(fx.pairing_id))
        .unwrap();
    let matched: Vec<i32> = entries
        .iter()
        .filter(|entry| entry.matches(reference, &pattern))
        .map(|entry| entry.id)
        .collect();
    assert_eq!(matched, vec![undated.id]);

    // Resolution through the same pattern sees the same candidates.
    let ctx = PriceContext::with_purchase_date(reference);
    let resolved = pricing::resolve_supplier_price(
        &repo,
        &ctx,
        HUB_ID,
        fx.pairing_id,
        10.0,
        fx.unit_uom_id,
        &pattern,
    )
    .unwrap();
    assert_eq!(resolved, Some(1000));
}

#[test]
fn test_purchase_line_uses_the_purchase_date_and_restores_the_context() {
    let test_db = common::TestDb::new("test_services_purchase_line.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    repo.create_supplier_price(
        &NewSupplierPrice::new(fx.pairing_id, 0.0, 1200)
            .with_start_date(date(2024, 6, 1))
            .with_end_date(date(2024, 6, 30)),
    )
    .unwrap();

    let purchase = Purchase {
        hub_id: HUB_ID,
        supplier_id: fx.supplier_id,
        purchase_date: Some(date(2024, 6, 15)),
    };
    let request = PurchaseRequest {
        product_id: fx.product_id,
        quantity: 3.0,
        uom_id: fx.unit_uom_id,
    };

    let mut ctx = PriceContext::with_purchase_date(date(2024, 1, 1));
    let line = purchases::compute_purchase_line(&repo, &mut ctx, &purchase, &request).unwrap();

    assert_eq!(line.unit_price_cents, 1200);
    assert_eq!(line.quantity, 3.0);
    assert_eq!(ctx.purchase_date(), Some(date(2024, 1, 1)));
}

#[test]
fn test_purchase_line_falls_back_to_the_list_price() {
    let test_db = common::TestDb::new("test_services_purchase_fallback.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    // The only tier requires more than the requested quantity.
    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 100.0, 600))
        .unwrap();

    let purchase = Purchase {
        hub_id: HUB_ID,
        supplier_id: fx.supplier_id,
        purchase_date: Some(date(2024, 6, 15)),
    };
    let request = PurchaseRequest {
        product_id: fx.product_id,
        quantity: 3.0,
        uom_id: fx.unit_uom_id,
    };

    let mut ctx = PriceContext::new();
    let line = purchases::compute_purchase_line(&repo, &mut ctx, &purchase, &request).unwrap();

    assert_eq!(line.unit_price_cents, 1500);
}

#[test]
fn test_listing_flags_validity_for_the_reference_date() {
    let test_db = common::TestDb::new("test_services_listing_flags.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    repo.create_supplier_price(&NewSupplierPrice::new(fx.pairing_id, 0.0, 1000))
        .unwrap();
    repo.create_supplier_price(
        &NewSupplierPrice::new(fx.pairing_id, 5.0, 800).with_end_date(date(2024, 1, 31)),
    )
    .unwrap();

    let ctx = PriceContext::with_purchase_date(date(2024, 6, 15));
    let views = supplier_prices::list_supplier_prices(&repo, &ctx, HUB_ID, fx.pairing_id).unwrap();

    assert_eq!(views.len(), 2);
    let undated = views.iter().find(|v| v.quantity == 0.0).unwrap();
    let expired = views.iter().find(|v| v.quantity == 5.0).unwrap();
    assert!(undated.valid);
    assert!(!expired.valid);
    assert_eq!(undated.unit_price, "10.00");
}

#[test]
fn test_other_hubs_cannot_touch_the_pairing() {
    let test_db = common::TestDb::new("test_services_hub_scoping.db");
    let repo = DieselRepository::new(test_db.pool());
    let fx = seed(&repo);

    let created = supplier_prices::create_supplier_price(
        &repo,
        HUB_ID,
        fx.pairing_id,
        add_form(0.0, "10.00", None, None),
    )
    .unwrap();

    let err = supplier_prices::create_supplier_price(
        &repo,
        2,
        fx.pairing_id,
        add_form(0.0, "9.00", None, None),
    )
    .expect_err("foreign hub cannot add prices");
    assert!(matches!(err, ServiceError::NotFound));

    let err = supplier_prices::remove_supplier_price(&repo, 2, created.id)
        .expect_err("foreign hub cannot delete prices");
    assert!(matches!(err, ServiceError::NotFound));

    supplier_prices::remove_supplier_price(&repo, HUB_ID, created.id).unwrap();
}
