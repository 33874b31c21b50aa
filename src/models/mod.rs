// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod record;

pub use document::Document;
pub use record::{Cell, Currency, RECORD_COLUMNS, Record};
