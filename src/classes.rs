//! Class list loading.
//!
//! A class list is a plain text file with one class name per line. The line
//! position (after dropping blank lines) becomes the category id.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Images2CocoError;

/// Reads the class list at `path`.
///
/// # Errors
/// Returns [`Images2CocoError::ClassListRead`] if the file cannot be read
/// as UTF-8 text.
pub fn load_class_list(path: &Path) -> Result<Vec<String>, Images2CocoError> {
    let content = fs::read_to_string(path).map_err(|source| Images2CocoError::ClassListRead {
        path: path.to_path_buf(),
        source,
    })?;

    let classes = parse_class_list(&content);
    if classes.is_empty() {
        warn!(path = %path.display(), "class list is empty; no categories will be written");
    } else {
        info!(path = %path.display(), count = classes.len(), "loaded class list");
    }

    Ok(classes)
}

/// Parses class names from text: trimmed, non-empty lines in order.
///
/// Duplicate names are kept; each occurrence becomes its own category.
pub fn parse_class_list(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
