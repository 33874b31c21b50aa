// file: src/extractor/price.rs
// description: auction base price and currency extraction
// reference: "con una base de ..." phrasing in judicial edicts

use crate::config::PriceStrategy;
use crate::extractor::fields::first_capture;
use crate::extractor::numbers::words_to_amount;
use crate::extractor::patterns::{BASE_NUMERAL, BASE_SPAN, BASE_TEXTO, DOLLAR_CUE};
use crate::models::Currency;
use crate::parser::normalizer::collapse_whitespace;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasePrice {
    pub moneda: Option<Currency>,
    pub numero: Option<f64>,
    pub texto: Option<String>,
}

/// Base price under the selected strategy. Currency is always read from the
/// "base (de) remate" / "con una base de" span.
pub fn extract_base(paragraph: &str, strategy: PriceStrategy) -> BasePrice {
    let span = extract_base_span(paragraph);
    let moneda = span.as_deref().map(detect_currency);

    match strategy {
        PriceStrategy::Words => {
            let texto = extract_base_texto(paragraph);
            let numero = texto.as_deref().and_then(words_to_amount);
            BasePrice {
                moneda,
                numero,
                texto,
            }
        }
        PriceStrategy::Numeral => {
            let numeral = span.as_deref().and_then(find_numeral);
            let moneda = match numeral {
                Some((Currency::Colones, _)) => Some(Currency::Colones),
                _ => moneda,
            };
            BasePrice {
                moneda,
                numero: numeral.map(|(_, amount)| amount),
                texto: span,
            }
        }
    }
}

/// Up to 200 characters after "base de remate" / "con una base de", ending
/// before the next period or newline.
pub fn extract_base_span(paragraph: &str) -> Option<String> {
    first_capture(&BASE_SPAN, paragraph)
}

/// Text after "Con una base de" through CÉNTIMOS or EXACTOS, with commas
/// removed and whitespace collapsed.
pub fn extract_base_texto(paragraph: &str) -> Option<String> {
    let captured = first_capture(&BASE_TEXTO, paragraph)?;
    Some(collapse_whitespace(&captured).replace(',', ""))
}

pub fn detect_currency(span: &str) -> Currency {
    if DOLLAR_CUE.is_match(span) {
        Currency::Dolares
    } else {
        Currency::Colones
    }
}

/// First currency-symbol amount in `span`, e.g. `₡15.000.000,50`.
pub fn find_numeral(span: &str) -> Option<(Currency, f64)> {
    let caps = BASE_NUMERAL.captures(span)?;
    let currency = match caps.get(1)?.as_str() {
        "₡" | "¢" => Currency::Colones,
        _ => Currency::Dolares,
    };
    let amount = parse_local_decimal(caps.get(2)?.as_str())?;
    Some((currency, amount))
}

/// `"15.000.000,50"` -> `15000000.5`
pub fn parse_local_decimal(text: &str) -> Option<f64> {
    text.replace('.', "").replace(',', ".").parse().ok()
}
