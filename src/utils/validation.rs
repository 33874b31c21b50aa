// file: src/utils/validation.rs
// description: input and output path validation
// reference: input validation patterns

use crate::error::{RemateError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            RemateError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(RemateError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_html_extension(path: &Path) -> Result<()> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("html") | Some("htm") => Ok(()),
            _ => Err(RemateError::Validation(format!(
                "File is not an html file: {}",
                path.display()
            ))),
        }
    }

    /// The parent directory of `path` must exist so nothing is created implicitly.
    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(RemateError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(RemateError::Validation(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}
