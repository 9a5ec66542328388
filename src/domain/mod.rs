pub mod product;
pub mod product_supplier;
pub mod purchase;
pub mod supplier;
pub mod supplier_price;
pub mod uom;
