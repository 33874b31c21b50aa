// file: src/pipeline/processor.rs
// description: turns a legal-notice html file into auction records
// reference: segments paragraphs, filters auction notices and runs the field extractors

use crate::config::Config;
use crate::error::{RemateError, Result};
use crate::extractor::RemateExtractor;
use crate::models::{Document, Record};
use crate::parser::ParagraphSegmenter;
use crate::utils::Validator;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use super::PipelineStats;

pub struct ProcessingResult {
    pub document: Document,
    pub records: Vec<Record>,
    pub stats: PipelineStats,
}

pub struct FileProcessor {
    segmenter: ParagraphSegmenter,
    extractor: RemateExtractor,
}

impl FileProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            segmenter: ParagraphSegmenter::new(&config.extraction.marker_phrase),
            extractor: RemateExtractor::new(&config.extraction),
        }
    }

    pub fn process_file(&self, path: &Path) -> Result<ProcessingResult> {
        Validator::validate_file_path(path)?;
        info!("Processing file: {}", path.display());

        let raw = fs::read(path).map_err(|source| RemateError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.process_bytes(&path.display().to_string(), &raw))
    }

    pub fn process_bytes(&self, source: &str, raw: &[u8]) -> ProcessingResult {
        let start = Instant::now();
        let document = Document::new(source.to_string(), raw, self.segmenter.segment(raw));
        debug!("Document {} sha256={}", document.source, document.content_hash);

        let mut stats = PipelineStats {
            paragraphs_scanned: document.len(),
            bytes_processed: document.byte_size,
            ..Default::default()
        };

        let records = self.extract_records(&document, &mut stats);

        stats.duration = start.elapsed();
        info!(
            "Scanned {} paragraphs, {} auction notices: {} with reference, {} with province, {} with price ({:.1}%)",
            stats.paragraphs_scanned,
            stats.auction_paragraphs,
            stats.with_reference,
            stats.with_province,
            stats.with_price,
            stats.price_coverage()
        );

        ProcessingResult {
            document,
            records,
            stats,
        }
    }

    /// One record per auction paragraph, in document order.
    pub fn extract_records(&self, document: &Document, stats: &mut PipelineStats) -> Vec<Record> {
        let mut records = Vec::new();

        for (index, paragraph) in document.paragraphs.iter().enumerate() {
            if !self.segmenter.is_auction(paragraph) {
                continue;
            }
            stats.auction_paragraphs += 1;

            let record = self.extractor.extract(paragraph, document.following(index));
            debug!(
                "Paragraph {}: expediente={:?} provincia={:?} base={:?}",
                index, record.expediente, record.provincia, record.base_remate_numero
            );

            stats.record(&record);
            records.push(record);
        }

        records
    }
}
