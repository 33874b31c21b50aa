// file: src/extractor/patterns.rs
// description: compiled regex patterns for auction field extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Case identifiers
    pub static ref REFERENCIA: Regex = Regex::new(
        r"(?i)Referencia\s*N[°º]?\s*[:\-]?\s*([A-Za-z0-9./\-]+)"
    ).expect("REFERENCIA regex is valid");

    pub static ref EXPEDIENTE: Regex = Regex::new(
        r"(?i)Exp(?:ediente)?[ :.\s]+([0-9A-Za-z\-/.]+)"
    ).expect("EXPEDIENTE regex is valid");

    pub static ref JUZGADO: Regex = Regex::new(
        r"(?i)(JUZGADO[^.;]{0,200})"
    ).expect("JUZGADO regex is valid");

    // Dates
    pub static ref FECHA_LARGA: Regex = Regex::new(
        r"(?i)(\d{1,2}\s+de\s+[A-Za-záéíóúñ]+\s+de\s+\d{4})"
    ).expect("FECHA_LARGA regex is valid");

    // Administrative divisions
    pub static ref CANTON: Regex = Regex::new(
        r"(?i)Cant[oó]n[:\x{FF1A}]?\s*((?:[0-9]{1,2}\s*[- ]?\s*)?[A-Za-zÁÉÍÓÚÑ ]+)"
    ).expect("CANTON regex is valid");

    pub static ref DISTRITO: Regex = Regex::new(
        r"(?i)Distrito[:\x{FF1A}]?\s*((?:[0-9]{1,2}\s*[- ]?\s*)?[A-Za-zÁÉÍÓÚÑ ]+)"
    ).expect("DISTRITO regex is valid");

    pub static ref GEO_NAME: Regex = Regex::new(
        r"(?i)^(?:[0-9]{1,2}\s*[- ]?\s*)?([A-Za-zÁÉÍÓÚÑ ]+)"
    ).expect("GEO_NAME regex is valid");

    // Base price. A period followed by a digit stays inside the span.
    pub static ref BASE_TEXTO: Regex = Regex::new(
        r"(?is)Con una base de\s+(.*?(?:CÉNTIMOS|EXACTOS),?)"
    ).expect("BASE_TEXTO regex is valid");

    pub static ref BASE_SPAN: Regex = Regex::new(
        r"(?i)((?:base(?:\s+de)?\s+remate|con una base de)\s*[:\x{FF1A}]?\s*(?:[^.\n]|\.[0-9]){1,200})"
    ).expect("BASE_SPAN regex is valid");

    pub static ref BASE_NUMERAL: Regex = Regex::new(
        r"(?i)(US\$|USD|\$|₡|¢)\s*([0-9]{1,3}(?:\.[0-9]{3})+(?:,[0-9]+)?|[0-9]+(?:,[0-9]+)?)"
    ).expect("BASE_NUMERAL regex is valid");

    pub static ref DOLLAR_CUE: Regex = Regex::new(
        r"(?i)d[oó]lar(?:es)?|\busd?\b|\$"
    ).expect("DOLLAR_CUE regex is valid");
}
