// file: src/exporter/json.rs
// description: json export of auction records with a run manifest

use crate::config::PriceStrategy;
use crate::error::Result;
use crate::models::{Document, Record};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub exported_at: String,
    pub source: &'a str,
    pub source_sha256: &'a str,
    pub strategy: PriceStrategy,
    pub total_records: usize,
    pub records: &'a [Record],
}

impl JsonExporter {
    pub fn new(output: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output: output.into(),
            pretty,
        }
    }

    pub fn export(
        &self,
        document: &Document,
        records: &[Record],
        strategy: PriceStrategy,
    ) -> Result<usize> {
        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            source: &document.source,
            source_sha256: &document.content_hash,
            strategy,
            total_records: records.len(),
            records,
        };

        let body = if self.pretty {
            serde_json::to_string_pretty(&manifest)?
        } else {
            serde_json::to_string(&manifest)?
        };

        fs::write(&self.output, body)?;
        info!(
            "Export complete: {} records written to {}",
            records.len(),
            self.output.display()
        );

        Ok(records.len())
    }
}
