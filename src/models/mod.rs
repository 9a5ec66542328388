pub mod product;
pub mod product_supplier;
pub mod supplier;
pub mod supplier_price;
pub mod uom;
