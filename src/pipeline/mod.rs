// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod processor;
mod runner;
mod stats;

pub use processor::{FileProcessor, ProcessingResult};
pub use runner::{RunSummary, run};
pub use stats::PipelineStats;
