// file: src/parser/mod.rs
// description: html segmentation and text normalization module exports
// reference: internal module structure

pub mod html;
pub mod normalizer;

pub use html::ParagraphSegmenter;
pub use normalizer::{collapse_whitespace, normalize, strip_diacritics};
