// file: src/extractor/remate.rs
// description: assembles one auction record from a notice paragraph and its successor
// reference: independent optional-field extractors composed into a flat record

use crate::config::{ExtractionConfig, PriceStrategy};
use crate::extractor::fields::{
    extract_expediente, extract_fecha, extract_juzgado, extract_referencia,
};
use crate::extractor::geo::{extract_canton, extract_distrito, extract_provincia};
use crate::extractor::price::extract_base;
use crate::models::Record;
use tracing::warn;

pub struct RemateExtractor {
    strategy: PriceStrategy,
    max_text_chars: usize,
}

impl RemateExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            strategy: config.price_strategy,
            max_text_chars: config.max_text_chars,
        }
    }

    pub fn extract(&self, paragraph: &str, following: Option<&str>) -> Record {
        let provincia = extract_provincia(paragraph);
        if provincia.is_none() {
            warn!(
                "No province found in auction paragraph: {}",
                preview(paragraph, 80)
            );
        }

        let base = extract_base(paragraph, self.strategy);

        Record {
            referencia: extract_referencia(following),
            expediente: extract_expediente(paragraph),
            juzgado: extract_juzgado(paragraph),
            fecha: extract_fecha(paragraph),
            provincia,
            canton: extract_canton(paragraph),
            distrito: extract_distrito(paragraph),
            base_moneda: base.moneda,
            base_remate_numero: base.numero,
            base_remate_texto: base.texto,
            texto_completo: preview(paragraph, self.max_text_chars),
        }
    }
}

/// First `max_chars` characters of `text`.
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
