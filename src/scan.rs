//! Image discovery and dimension extraction.
//!
//! The image root is walked recursively in file-name order, so the same tree
//! always yields the same sequence and therefore the same image ids. Paths
//! are reported relative to the root with `/` separators.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::coco::ImageInfo;
use crate::error::Images2CocoError;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [Images] [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Lazily walks `root` and yields the relative path of every candidate image file.
///
/// Files whose lowercased relative path ends with one of `excluded` are
/// skipped; `excluded` is expected to be lowercase already (see
/// [`ConvertConfig::new`](crate::config::ConvertConfig::new)). Hidden files
/// (leading `.`) are skipped too, but hidden directories are still entered.
pub fn walk_images<'a>(
    root: &'a Path,
    excluded: &'a [String],
) -> impl Iterator<Item = Result<String, Images2CocoError>> + 'a {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(Images2CocoError::DirectoryWalk {
                        path: root.to_path_buf(),
                        source,
                    }))
                }
            };

            if !entry.file_type().is_file() || is_hidden(entry.path()) {
                return None;
            }

            let rel = rel_string(root, entry.path());
            if is_excluded(&rel, excluded) {
                debug!(path = %rel, "excluded by suffix");
                return None;
            }

            Some(Ok(rel))
        })
}

/// Collects [`walk_images`] into a list, checking the root first.
pub fn enumerate_images(
    root: &Path,
    excluded: &[String],
) -> Result<Vec<String>, Images2CocoError> {
    if !root.is_dir() {
        return Err(Images2CocoError::ImageRootNotFound {
            path: root.to_path_buf(),
        });
    }

    walk_images(root, excluded).collect()
}

/// Reads `(width, height)` from the image header at `path`.
///
/// Only the header is parsed and the file is closed before returning,
/// whether or not the read succeeds.
pub fn read_image_dimensions(path: &Path) -> Result<(u32, u32), Images2CocoError> {
    let size = imagesize::size(path).map_err(|source| Images2CocoError::ImageDimensionRead {
        path: path.to_path_buf(),
        source,
    })?;

    let width: u32 = size
        .width
        .try_into()
        .map_err(|_| Images2CocoError::InvalidImageDimensions {
            path: path.to_path_buf(),
            message: format!("image width {} does not fit in u32", size.width),
        })?;

    let height: u32 = size
        .height
        .try_into()
        .map_err(|_| Images2CocoError::InvalidImageDimensions {
            path: path.to_path_buf(),
            message: format!("image height {} does not fit in u32", size.height),
        })?;

    if width == 0 || height == 0 {
        return Err(Images2CocoError::InvalidImageDimensions {
            path: path.to_path_buf(),
            message: format!("{width}x{height} (must be positive)"),
        });
    }

    Ok((width, height))
}

/// Enumerates images under `root` and reads each one's dimensions.
///
/// The first unreadable image aborts the scan.
pub fn collect_image_infos(
    root: &Path,
    excluded: &[String],
) -> Result<Vec<ImageInfo>, Images2CocoError> {
    let rel_paths = enumerate_images(root, excluded)?;
    info!(root = %root.display(), count = rel_paths.len(), "found image files");
    if rel_paths.is_empty() {
        warn!(root = %root.display(), "no image files found; manifest will have no images");
    }

    let pb = create_progress_bar(rel_paths.len() as u64);
    let mut infos = Vec::with_capacity(rel_paths.len());

    for rel in rel_paths {
        let full_path: PathBuf = root.join(&rel);
        let (width, height) =
            read_image_dimensions(&full_path).inspect_err(|_| pb.abandon())?;
        debug!(path = %rel, width, height, "read image dimensions");

        infos.push(ImageInfo::new(rel, width, height));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(infos)
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

fn is_excluded(rel: &str, excluded: &[String]) -> bool {
    if excluded.is_empty() {
        return false;
    }
    let lowered = rel.to_lowercase();
    excluded.iter().any(|suffix| lowered.ends_with(suffix.as_str()))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Joins path components with `/`. A backslash inside a unix file name stays as is.
fn rel_string(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
