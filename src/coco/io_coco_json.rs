//! COCO JSON writer (and a reader for checking written manifests).
//!
//! # Atomic Output
//!
//! [`write_coco_json`] never leaves a partially written manifest behind.
//! The document is serialized into a temporary file inside the destination
//! directory, flushed, and only then renamed over the final path. If any
//! step fails the temporary file is removed on drop.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::model::CocoDocument;
use crate::error::Images2CocoError;

/// Writes a manifest to `path`, creating the parent directory if needed.
///
/// # Errors
/// Returns an error if the directory cannot be created, serialization
/// fails, or the finished file cannot be moved into place.
pub fn write_coco_json(path: &Path, document: &CocoDocument) -> Result<(), Images2CocoError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|source| Images2CocoError::OutputDirCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let tmp = create_temp_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    debug!(tmp = %tmp.path().display(), "writing manifest to temporary file");

    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
            Images2CocoError::CocoJsonWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path)
        .map_err(|err| Images2CocoError::OutputPersist {
            path: path.to_path_buf(),
            source: err.error,
        })?;

    info!(
        path = %path.display(),
        images = document.images.len(),
        categories = document.categories.len(),
        "wrote COCO manifest"
    );
    Ok(())
}

/// Temp file that ends up with the mode a plain create would give (0o666 minus umask),
/// not the owner-only default of `NamedTempFile`.
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".images2coco-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Reads a manifest previously written by [`write_coco_json`].
pub fn read_coco_json(path: &Path) -> Result<CocoDocument, Images2CocoError> {
    let file = File::open(path).map_err(Images2CocoError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| Images2CocoError::CocoJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes a manifest to a pretty-printed JSON string.
///
/// Useful for testing without file I/O.
pub fn to_coco_string(document: &CocoDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

/// Parses a manifest from a JSON string.
pub fn from_coco_str(json: &str) -> Result<CocoDocument, serde_json::Error> {
    serde_json::from_str(json)
}
