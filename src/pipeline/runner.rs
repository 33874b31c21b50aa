// file: src/pipeline/runner.rs
// description: one full run from an html file to an exported table
// reference: validate, process, then export so fatal input errors write nothing

use crate::config::Config;
use crate::error::Result;
use crate::exporter::{ExportFormat, JsonExporter, XlsxExporter};
use crate::utils::Validator;
use std::path::Path;
use tracing::{info, warn};

use super::{FileProcessor, PipelineStats};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records_written: usize,
    pub stats: PipelineStats,
}

/// Extracts every auction notice in `input` and writes them to `output`.
/// The output file is only created after the input has been fully processed.
pub fn run(config: &Config, input: &Path, output: &Path) -> Result<RunSummary> {
    let format = ExportFormat::from_path(output)?;
    Validator::validate_output_path(output)?;

    if let Err(e) = Validator::validate_html_extension(input) {
        warn!("{}", e);
    }

    info!(
        "Extracting remates from {} (price strategy: {})",
        input.display(),
        config.extraction.price_strategy
    );

    let result = FileProcessor::new(config).process_file(input)?;

    let records_written = match format {
        ExportFormat::Xlsx => XlsxExporter::new(output, config.export.sheet_name.clone())
            .export(&result.records)?,
        ExportFormat::Json => JsonExporter::new(output, config.export.pretty_json).export(
            &result.document,
            &result.records,
            config.extraction.price_strategy,
        )?,
    };

    Ok(RunSummary {
        records_written,
        stats: result.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemateError;
    use std::fs;
    use tempfile::TempDir;

    const EDICTO: &str = "<p>REMATE LA FINCA de Heredia, con una base de DIEZ MIL COLONES EXACTOS.</p>\
        <p>Referencia N° 25-000001-CI</p>";

    #[test]
    fn test_missing_input_writes_no_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("remates_html.xlsx");

        let result = run(
            &Config::default_config(),
            &dir.path().join("no_existe.html"),
            &output,
        );

        assert!(matches!(result, Err(RemateError::Validation(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_unsupported_output_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("edicto.html");
        fs::write(&input, EDICTO).unwrap();
        let output = dir.path().join("remates.csv");

        assert!(run(&Config::default_config(), &input, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_writes_xlsx() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("edicto.html");
        fs::write(&input, EDICTO).unwrap();
        let output = dir.path().join("remates_html.xlsx");

        let summary = run(&Config::default_config(), &input, &output).unwrap();

        assert_eq!(summary.records_written, 1);
        assert_eq!(summary.stats.with_reference, 1);
        assert_eq!(summary.stats.with_province, 1);
        assert!(output.exists());
    }

    #[test]
    fn test_run_writes_json() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("edicto.html");
        fs::write(&input, EDICTO).unwrap();
        let output = dir.path().join("remates.json");

        run(&Config::default_config(), &input, &output).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["records"][0]["referencia"], "25-000001-CI");
        assert_eq!(value["records"][0]["provincia"], "HEREDIA");
        assert_eq!(value["records"][0]["base_remate_numero"], 10000.0);
    }
}
