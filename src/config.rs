//! Run configuration for a single images → COCO conversion.

use std::path::{Path, PathBuf};

use crate::error::Images2CocoError;

/// Required suffix of the output file name.
pub const OUTPUT_SUFFIX: &str = ".json";

/// Directory, next to the image root, that receives the output file.
pub const ANNOTATIONS_DIR: &str = "annotations";

/// Validated configuration for a conversion run.
///
/// Construction checks the output name, so a `ConvertConfig` that exists
/// always points at a `.json` file. No file-system access happens here.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Root directory that is scanned recursively for images.
    pub image_root: PathBuf,

    /// Newline-delimited class list.
    pub classes_path: PathBuf,

    /// File name of the output manifest (e.g. `instances.json`).
    pub output_name: String,

    /// Path suffixes to skip, already lowercased.
    pub exclude_extensions: Vec<String>,
}

impl ConvertConfig {
    /// Creates a configuration, rejecting output names that are not plain `.json` file names.
    pub fn new(
        image_root: impl Into<PathBuf>,
        classes_path: impl Into<PathBuf>,
        output_name: impl Into<String>,
        exclude_extensions: &[String],
    ) -> Result<Self, Images2CocoError> {
        let output_name = output_name.into();
        validate_output_name(&output_name)?;

        Ok(Self {
            image_root: image_root.into(),
            classes_path: classes_path.into(),
            output_name,
            exclude_extensions: exclude_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        })
    }

    /// Directory the manifest is written to: `<image_root>/../annotations`.
    pub fn output_dir(&self) -> PathBuf {
        self.image_root.join("..").join(ANNOTATIONS_DIR)
    }

    /// Full path of the manifest.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(&self.output_name)
    }
}

fn validate_output_name(name: &str) -> Result<(), Images2CocoError> {
    let invalid = |reason: &str| Images2CocoError::InvalidOutputName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if !name.ends_with(OUTPUT_SUFFIX) {
        return Err(invalid("the output file name must have a .json suffix"));
    }

    if name.len() == OUTPUT_SUFFIX.len() {
        return Err(invalid("the output file name needs a stem before .json"));
    }

    // Only a bare file name is accepted; the directory is always derived.
    if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
        return Err(invalid("expected a file name, not a path"));
    }

    Ok(())
}
