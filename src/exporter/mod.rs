// file: src/exporter/mod.rs
// description: record export formats selected by output file extension

pub mod json;
pub mod xlsx;

pub use json::{ExportManifest, JsonExporter};
pub use xlsx::XlsxExporter;

use crate::error::{RemateError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("xlsx") => Ok(ExportFormat::Xlsx),
            Some("json") => Ok(ExportFormat::Json),
            _ => Err(RemateError::Validation(format!(
                "Unsupported output format (expected .xlsx or .json): {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("remates_html.xlsx")).unwrap(),
            ExportFormat::Xlsx
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out/REMATES.JSON")).unwrap(),
            ExportFormat::Json
        );
        assert!(ExportFormat::from_path(Path::new("remates.csv")).is_err());
        assert!(ExportFormat::from_path(Path::new("remates")).is_err());
    }
}
