// file: src/extractor/fields.rs
// description: case identifier, court and date extraction from notice paragraphs
// reference: pattern-based field extraction

use crate::extractor::patterns::*;
use regex::Regex;

/// First capture group of `pattern` in `text`, trimmed; `None` when absent or blank.
pub(crate) fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    let captured = pattern.captures(text)?.get(1)?.as_str().trim();
    (!captured.is_empty()).then(|| captured.to_string())
}

/// Reference number, read from the paragraph that follows the auction paragraph.
pub fn extract_referencia(following: Option<&str>) -> Option<String> {
    first_capture(&REFERENCIA, following?)
}

pub fn extract_expediente(paragraph: &str) -> Option<String> {
    first_capture(&EXPEDIENTE, paragraph)
}

pub fn extract_juzgado(paragraph: &str) -> Option<String> {
    first_capture(&JUZGADO, paragraph)
}

pub fn extract_fecha(paragraph: &str) -> Option<String> {
    first_capture(&FECHA_LARGA, paragraph)
}
