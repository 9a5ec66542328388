pub mod context;
pub mod errors;
pub mod pricing;
pub mod purchases;
pub mod supplier_prices;

pub use errors::{ServiceError, ServiceResult};
