pub mod index;
pub mod monitored_stocks;
pub mod not_found;
