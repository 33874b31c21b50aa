// file: src/models/document.rs
// description: parsed legal-notice document as an ordered list of paragraphs
// reference: internal data structures

use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub content_hash: String,
    pub byte_size: u64,
    pub paragraphs: Vec<String>,
}

impl Document {
    pub fn new(source: String, raw: &[u8], paragraphs: Vec<String>) -> Self {
        Self {
            source,
            content_hash: Self::compute_hash(raw),
            byte_size: raw.len() as u64,
            paragraphs,
        }
    }

    fn compute_hash(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        format!("{:x}", hasher.finalize())
    }

    /// Paragraph at `index + 1`, if any.
    pub fn following(&self, index: usize) -> Option<&str> {
        self.paragraphs.get(index + 1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
