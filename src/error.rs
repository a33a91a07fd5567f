use std::path::PathBuf;
use thiserror::Error;

/// The main error type for images2coco operations.
#[derive(Debug, Error)]
pub enum Images2CocoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output file name '{name}': {reason}")]
    InvalidOutputName { name: String, reason: String },

    #[error("Image root {path} does not exist or is not a directory")]
    ImageRootNotFound { path: PathBuf },

    #[error("Failed while traversing {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Invalid image dimensions in {path}: {message}")]
    InvalidImageDimensions { path: PathBuf, message: String },

    #[error("Failed to read class list from {path}: {source}")]
    ClassListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate image file name '{file_name}' (first assigned image id {first_id})")]
    DuplicateFileName { file_name: String, first_id: u64 },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write COCO JSON to {path}: {source}")]
    CocoJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to move finished COCO JSON into {path}: {source}")]
    OutputPersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse COCO JSON from {path}: {source}")]
    CocoJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
