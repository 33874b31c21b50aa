// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RemateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Normalized phrase that flags a paragraph as an auction notice.
    pub marker_phrase: String,
    /// Characters of the auction paragraph kept in `texto_completo`.
    pub max_text_chars: usize,
    pub price_strategy: PriceStrategy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    pub default_output: PathBuf,
    pub sheet_name: String,
    pub pretty_json: bool,
}

/// How the base price of an auction is read out of the paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriceStrategy {
    /// "Con una base de ... EXACTOS" converted from Spanish number words.
    #[default]
    Words,
    /// Currency-symbol numeral (`₡15.000.000,00`, `$ 1.500`) inside the base span.
    Numeral,
}

impl PriceStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceStrategy::Words => "words",
            PriceStrategy::Numeral => "numeral",
        }
    }
}

impl fmt::Display for PriceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            marker_phrase: "remate la finca".to_string(),
            max_text_chars: 5000,
            price_strategy: PriceStrategy::Words,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from("remates_html.xlsx"),
            sheet_name: "remates".to_string(),
            pretty_json: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| RemateError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RemateError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn with_price_strategy(mut self, strategy: PriceStrategy) -> Self {
        self.extraction.price_strategy = strategy;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.marker_phrase.trim().is_empty() {
            return Err(RemateError::Config(
                "marker_phrase must not be empty".to_string(),
            ));
        }

        if self.extraction.max_text_chars == 0 {
            return Err(RemateError::Config(
                "max_text_chars must be greater than 0".to_string(),
            ));
        }

        if self.export.sheet_name.trim().is_empty() {
            return Err(RemateError::Config(
                "sheet_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.extraction.marker_phrase, "remate la finca");
        assert_eq!(config.extraction.max_text_chars, 5000);
        assert_eq!(config.extraction.price_strategy, PriceStrategy::Words);
        assert_eq!(config.export.default_output, PathBuf::from("remates_html.xlsx"));
    }

    #[test]
    fn test_load_partial_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("remates.toml");
        fs::write(
            &path,
            "[extraction]\nprice_strategy = \"numeral\"\nmax_text_chars = 200\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.extraction.price_strategy, PriceStrategy::Numeral);
        assert_eq!(config.extraction.max_text_chars, 200);
        assert_eq!(config.extraction.marker_phrase, "remate la finca");
        assert_eq!(config.export.sheet_name, "remates");
    }

    #[test]
    fn test_load_rejects_zero_text_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("remates.toml");
        fs::write(&path, "[extraction]\nmax_text_chars = 0\n").unwrap();

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(RemateError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/remates.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_strategy_override() {
        let config = Config::default_config().with_price_strategy(PriceStrategy::Numeral);
        assert_eq!(config.extraction.price_strategy.to_string(), "numeral");
    }
}
