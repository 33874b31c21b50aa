// file: src/extractor/mod.rs
// description: auction field extraction module exports
// reference: internal module structure

pub mod fields;
pub mod geo;
pub mod numbers;
pub mod patterns;
pub mod price;
pub mod remate;

pub use geo::{PROVINCIAS, clean_geo};
pub use numbers::words_to_amount;
pub use price::BasePrice;
pub use remate::RemateExtractor;
