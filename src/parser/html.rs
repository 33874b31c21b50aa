// file: src/parser/html.rs
// description: splits legal-notice html into paragraph texts and flags auction notices
// reference: https://docs.rs/scraper

use crate::parser::normalizer::{collapse_whitespace, normalize};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use lazy_static::lazy_static;
use regex::bytes::Regex;
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;
use tracing::debug;

lazy_static! {
    static ref PARAGRAPH: Selector = Selector::parse("p").expect("PARAGRAPH selector is valid");

    static ref META_CHARSET: Regex = Regex::new(
        r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_.:\-]+)"#
    ).expect("META_CHARSET regex is valid");
}

pub struct ParagraphSegmenter {
    marker: String,
}

impl ParagraphSegmenter {
    pub fn new(marker_phrase: &str) -> Self {
        Self {
            marker: normalize(marker_phrase),
        }
    }

    /// Visible text of every `<p>` in document order. See [`decode`] for how
    /// the bytes are turned into text.
    pub fn segment(&self, raw: &[u8]) -> Vec<String> {
        let markup = decode(raw);
        let html = Html::parse_document(&markup);

        let paragraphs: Vec<String> = html.select(&PARAGRAPH).map(paragraph_text).collect();

        debug!("Segmented {} paragraphs", paragraphs.len());
        paragraphs
    }

    pub fn is_auction(&self, paragraph: &str) -> bool {
        normalize(paragraph).contains(&self.marker)
    }
}

/// Valid UTF-8 is used as is. Anything else is decoded with the charset
/// declared in `<meta>`, or windows-1252 when none (or UTF-8) is declared.
pub fn decode(raw: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(raw) {
        return Cow::Borrowed(text);
    }

    let encoding = declared_charset(raw)
        .filter(|encoding| *encoding != UTF_8)
        .unwrap_or(WINDOWS_1252);
    debug!("Input is not UTF-8, decoding as {}", encoding.name());

    let (text, _, had_errors) = encoding.decode(raw);
    if had_errors {
        debug!("Replaced malformed {} sequences", encoding.name());
    }
    text
}

fn declared_charset(raw: &[u8]) -> Option<&'static Encoding> {
    let label = META_CHARSET.captures(raw)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}

fn paragraph_text(element: ElementRef<'_>) -> String {
    let joined = element
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}
