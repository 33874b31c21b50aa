// file: src/pipeline/stats.rs
// description: extraction statistics for a single run
// reference: per-field coverage counters

use crate::models::Record;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub paragraphs_scanned: usize,
    pub auction_paragraphs: usize,
    pub records_emitted: usize,
    pub with_reference: usize,
    pub with_province: usize,
    pub with_price: usize,
    pub bytes_processed: u64,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &Record) {
        self.records_emitted += 1;
        if record.referencia.is_some() {
            self.with_reference += 1;
        }
        if record.provincia.is_some() {
            self.with_province += 1;
        }
        if record.base_remate_numero.is_some() {
            self.with_price += 1;
        }
    }

    /// Share of emitted records carrying a numeric base price, in percent.
    pub fn price_coverage(&self) -> f64 {
        if self.records_emitted == 0 {
            return 0.0;
        }
        (self.with_price as f64 / self.records_emitted as f64) * 100.0
    }

    pub fn paragraphs_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.paragraphs_scanned as f64 / secs
    }
}
