// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use config::{Config, ExportConfig, ExtractionConfig, PriceStrategy};
pub use error::{RemateError, Result};
pub use exporter::{ExportFormat, ExportManifest, JsonExporter, XlsxExporter};
pub use extractor::{BasePrice, PROVINCIAS, RemateExtractor, clean_geo, words_to_amount};
pub use models::{Currency, Document, RECORD_COLUMNS, Record};
pub use parser::{ParagraphSegmenter, normalize};
pub use pipeline::{FileProcessor, PipelineStats, ProcessingResult, RunSummary};
pub use utils::Validator;
