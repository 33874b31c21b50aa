// file: src/exporter/xlsx.rs
// description: spreadsheet export of auction records, one row per record
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::Result;
use crate::models::{Cell, RECORD_COLUMNS, Record};
use rust_xlsxwriter::{Format, Workbook};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct XlsxExporter {
    output: PathBuf,
    sheet_name: String,
}

impl XlsxExporter {
    pub fn new(output: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            sheet_name: sheet_name.into(),
        }
    }

    /// Header row of column names followed by one row per record; no index column.
    pub fn export(&self, records: &[Record]) -> Result<usize> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, name) in RECORD_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *name, &header)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, cell) in record.cells().iter().enumerate() {
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row, col as u16, *text)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row, col as u16, *value)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        workbook.save(&self.output)?;
        info!(
            "Wrote {} records to {}",
            records.len(),
            self.output.display()
        );

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use std::fs;
    use tempfile::tempdir;

    fn sample_record() -> Record {
        Record {
            referencia: Some("24-000123-CI".to_string()),
            provincia: Some("SAN JOSE".to_string()),
            base_moneda: Some(Currency::Colones),
            base_remate_numero: Some(15000.0),
            texto_completo: "REMATE LA FINCA".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("remates_html.xlsx");
        let exporter = XlsxExporter::new(&path, "remates");

        let written = exporter.export(&[sample_record(), Record::default()]).unwrap();

        assert_eq!(written, 2);
        let bytes = fs::read(&path).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vacio.xlsx");
        let exporter = XlsxExporter::new(&path, "remates");

        assert_eq!(exporter.export(&[]).unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_sheet_name_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("malo.xlsx");
        let exporter = XlsxExporter::new(&path, "bad/name");

        assert!(exporter.export(&[sample_record()]).is_err());
        assert!(!path.exists());
    }
}
