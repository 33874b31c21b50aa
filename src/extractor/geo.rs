// file: src/extractor/geo.rs
// description: province, canton and district extraction with name cleanup
// reference: Costa Rica administrative divisions

use crate::extractor::patterns::{CANTON, DISTRITO, GEO_NAME};
use crate::parser::normalizer::{normalize, strip_diacritics};
use lazy_static::lazy_static;
use regex::Regex;

/// Normalized province names, in match priority order.
pub const PROVINCIAS: [&str; 7] = [
    "puntarenas",
    "alajuela",
    "guanacaste",
    "san jose",
    "heredia",
    "limon",
    "cartago",
];

lazy_static! {
    static ref PROVINCIA_PATTERNS: Vec<(&'static str, Regex)> = PROVINCIAS
        .iter()
        .map(|name| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name)))
                .expect("province regex is valid");
            (*name, pattern)
        })
        .collect();
}

/// First province named in the paragraph, upper-cased (`"SAN JOSE"`).
pub fn extract_provincia(paragraph: &str) -> Option<String> {
    let normalized = normalize(paragraph);
    PROVINCIA_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&normalized))
        .map(|(name, _)| name.to_uppercase())
}

pub fn extract_canton(paragraph: &str) -> Option<String> {
    capture_geo(&CANTON, paragraph)
}

pub fn extract_distrito(paragraph: &str) -> Option<String> {
    capture_geo(&DISTRITO, paragraph)
}

fn capture_geo(pattern: &Regex, paragraph: &str) -> Option<String> {
    let raw = pattern.captures(paragraph)?.get(1)?.as_str();
    let cleaned = clean_geo(raw);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Drops a leading numeric code ("6-", "6 ") and diacritics, then upper-cases.
/// `clean_geo("6-GUÁCIMO") == "GUACIMO"`.
pub fn clean_geo(text: &str) -> String {
    let trimmed = text.trim();
    let name = GEO_NAME
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str());

    strip_diacritics(name).trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_geo_strips_code_and_accents() {
        assert_eq!(clean_geo("6-GUÁCIMO"), "GUACIMO");
        assert_eq!(clean_geo("6 Guácimo"), "GUACIMO");
        assert_eq!(clean_geo("GUACIMO"), "GUACIMO");
        assert_eq!(clean_geo("  03 - San Rafael  "), "SAN RAFAEL");
    }

    #[test]
    fn test_clean_geo_is_idempotent() {
        for input in ["6-GUÁCIMO", "Pérez Zeledón", "19 - Pérez Zeledón", "Limón"] {
            let once = clean_geo(input);
            assert_eq!(clean_geo(&once), once);
        }
    }

    #[test]
    fn test_extract_provincia() {
        assert_eq!(
            extract_provincia("JUZGADO CIVIL DE SAN JOSÉ"),
            Some("SAN JOSE".to_string())
        );
        assert_eq!(
            extract_provincia("partido de Limón, cantón Pococí"),
            Some("LIMON".to_string())
        );
        assert_eq!(extract_provincia("sin provincia conocida"), None);
    }

    #[test]
    fn test_extract_provincia_requires_whole_word() {
        assert_eq!(extract_provincia("Cartagonia"), None);
        assert_eq!(extract_provincia("barrio San Josecito"), None);
    }

    #[test]
    fn test_extract_provincia_priority_order() {
        assert_eq!(
            extract_provincia("Juzgado de Cartago, finca del partido de Alajuela"),
            Some("ALAJUELA".to_string())
        );
    }

    #[test]
    fn test_extract_canton_and_distrito() {
        let text = "situada en el Distrito: 2-San Rafael, Cantón: 6-Guácimo, de Limón.";
        assert_eq!(extract_canton(text), Some("GUACIMO".to_string()));
        assert_eq!(extract_distrito(text), Some("SAN RAFAEL".to_string()));
        assert_eq!(extract_canton("sin datos"), None);
    }
}
