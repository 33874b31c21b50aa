// file: src/extractor/numbers.rs
// description: spanish cardinal number phrases to numeric amounts
// reference: spanish number grammar (unidades, decenas, centenas, mil, millones)

use crate::parser::normalizer::normalize;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

/// Currency and filler words dropped before conversion.
const FILLER_WORDS: [&str; 4] = ["exactos", "colones", "dolares", "de"];

const UNIT_WORDS: [(&str, u64); 49] = [
    ("cero", 0),
    ("un", 1),
    ("uno", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("once", 11),
    ("doce", 12),
    ("trece", 13),
    ("catorce", 14),
    ("quince", 15),
    ("dieciseis", 16),
    ("diecisiete", 17),
    ("dieciocho", 18),
    ("diecinueve", 19),
    ("veinte", 20),
    ("veintiun", 21),
    ("veintiuno", 21),
    ("veintidos", 22),
    ("veintitres", 23),
    ("veinticuatro", 24),
    ("veinticinco", 25),
    ("veintiseis", 26),
    ("veintisiete", 27),
    ("veintiocho", 28),
    ("veintinueve", 29),
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("sesenta", 60),
    ("setenta", 70),
    ("ochenta", 80),
    ("noventa", 90),
    ("cien", 100),
    ("ciento", 100),
    ("doscientos", 200),
    ("trescientos", 300),
    ("cuatrocientos", 400),
    ("quinientos", 500),
    ("seiscientos", 600),
    ("setecientos", 700),
    ("ochocientos", 800),
    ("novecientos", 900),
];

const SCALE_WORDS: [(&str, u64); 3] = [
    ("mil", 1_000),
    ("millon", 1_000_000),
    ("millones", 1_000_000),
];

lazy_static! {
    static ref UNITS: HashMap<&'static str, u64> = UNIT_WORDS.into_iter().collect();
    static ref SCALES: HashMap<&'static str, u64> = SCALE_WORDS.into_iter().collect();
}

/// Converts a phrase such as `"QUINCE MILLONES DOSCIENTOS MIL COLONES EXACTOS"`
/// into `15200000.0`.
///
/// Unknown words are skipped and digit runs inside a token are read as a
/// literal number. A phrase that sums to zero yields `None`, as does one with
/// no usable words.
pub fn words_to_amount(text: &str) -> Option<f64> {
    let normalized = normalize(text);
    let mut words: Vec<&str> = normalized
        .split_whitespace()
        .filter(|word| !FILLER_WORDS.contains(word))
        .collect();

    if words.is_empty() {
        return None;
    }

    if words == ["un", "mil"] {
        words = vec!["mil"];
    }

    let mut total: u64 = 0;
    let mut current: u64 = 0;

    for word in words {
        if let Some(value) = UNITS.get(word) {
            current = current.saturating_add(*value);
        } else if let Some(scale) = SCALES.get(word) {
            let group = if current == 0 { 1 } else { current };
            total = total.saturating_add(group.saturating_mul(*scale));
            current = 0;
        } else if let Some(literal) = digits_of(word) {
            current = current.saturating_add(literal);
        }
    }

    let amount = total.saturating_add(current);
    (amount > 0).then_some(amount as f64)
}

/// Digits of `word` as a number, saturating at `u64::MAX` for oversized runs.
fn digits_of(word: &str) -> Option<u64> {
    let digits: String = word.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    match digits.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Digit run {} exceeds u64, saturating", digits);
            Some(u64::MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_scale_groups() {
        assert_eq!(words_to_amount("quince millones doscientos mil"), Some(15_200_000.0));
        assert_eq!(
            words_to_amount("DOS MILLONES QUINIENTOS CINCUENTA MIL TRESCIENTOS COLONES EXACTOS"),
            Some(2_550_300.0)
        );
    }

    #[test]
    fn test_un_mil_is_one_thousand() {
        assert_eq!(words_to_amount("un mil"), Some(1000.0));
        assert_eq!(words_to_amount("mil"), Some(1000.0));
        assert_eq!(words_to_amount("un millón de colones"), Some(1_000_000.0));
    }

    #[test]
    fn test_accents_and_fillers() {
        assert_eq!(words_to_amount("DIECISÉIS MIL DÓLARES EXACTOS"), Some(16_000.0));
        assert_eq!(words_to_amount("QUINCE MIL COLONES EXACTOS"), Some(15_000.0));
    }

    #[test]
    fn test_ciento_compounds() {
        assert_eq!(
            words_to_amount("ciento veintitres mil cuatrocientos cinco"),
            Some(123_405.0)
        );
    }

    #[test]
    fn test_literal_digits() {
        assert_eq!(words_to_amount("25 millones"), Some(25_000_000.0));
        assert_eq!(words_to_amount("(500)"), Some(500.0));
    }

    #[test]
    fn test_oversized_digit_run_saturates() {
        let amount = words_to_amount("99999999999999999999999 millones").unwrap();
        assert_eq!(amount, u64::MAX as f64);
        assert!(amount > 1.0e19);
    }

    #[test]
    fn test_nothing_parsed() {
        assert_eq!(words_to_amount(""), None);
        assert_eq!(words_to_amount("   "), None);
        assert_eq!(words_to_amount("xyz no numbers"), None);
        assert_eq!(words_to_amount("cero colones"), None);
    }

    #[test]
    fn test_vocabulary_tables() {
        assert_eq!(UNITS.len(), 49);
        assert_eq!(UNITS.get("veintiun"), Some(&21));
        assert_eq!(SCALES.get("millones"), Some(&1_000_000));
    }
}
