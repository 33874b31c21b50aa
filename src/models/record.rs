// file: src/models/record.rs
// description: flat auction record emitted once per auction paragraph
// reference: tabular export rows

use serde::{Deserialize, Serialize};

/// Column names in export order.
pub const RECORD_COLUMNS: [&str; 11] = [
    "referencia",
    "expediente",
    "juzgado",
    "fecha",
    "provincia",
    "canton",
    "distrito",
    "base_moneda",
    "base_remate_numero",
    "base_remate_texto",
    "texto_completo",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Colones,
    Dolares,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Colones => "COLONES",
            Currency::Dolares => "DOLARES",
        }
    }
}

/// Field order matches [`RECORD_COLUMNS`]; serde keeps declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub referencia: Option<String>,
    pub expediente: Option<String>,
    pub juzgado: Option<String>,
    pub fecha: Option<String>,
    pub provincia: Option<String>,
    pub canton: Option<String>,
    pub distrito: Option<String>,
    pub base_moneda: Option<Currency>,
    pub base_remate_numero: Option<f64>,
    pub base_remate_texto: Option<String>,
    pub texto_completo: String,
}

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

impl Record {
    /// Cells in [`RECORD_COLUMNS`] order.
    pub fn cells(&self) -> [Cell<'_>; 11] {
        fn text(value: &Option<String>) -> Cell<'_> {
            value.as_deref().map_or(Cell::Empty, Cell::Text)
        }

        [
            text(&self.referencia),
            text(&self.expediente),
            text(&self.juzgado),
            text(&self.fecha),
            text(&self.provincia),
            text(&self.canton),
            text(&self.distrito),
            self.base_moneda
                .map_or(Cell::Empty, |currency| Cell::Text(currency.as_str())),
            self.base_remate_numero.map_or(Cell::Empty, Cell::Number),
            text(&self.base_remate_texto),
            Cell::Text(&self.texto_completo),
        ]
    }
}
