pub mod supplier_prices;
