//! images2coco: bootstrap a COCO annotation file from a folder of images.
//!
//! The conversion is a straight pipeline: walk the image root, read each
//! image's dimensions from its header, load the class list, assemble the
//! COCO document, and write it atomically to `<image root>/../annotations/`.
//! The resulting manifest lists images and categories only; its
//! `annotations` list is left empty for labeling tools to fill.
//!
//! # Modules
//!
//! - [`scan`]: recursive image discovery and dimension reading
//! - [`classes`]: class list loading
//! - [`coco`]: document model, assembly, and JSON output
//! - [`config`]: validated run configuration
//! - [`error`]: error types for images2coco operations

pub mod classes;
pub mod coco;
pub mod config;
pub mod error;
pub mod scan;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

pub use config::ConvertConfig;
pub use error::Images2CocoError;

/// Convert images to COCO format without annotations.
#[derive(Parser, Debug)]
#[command(name = "images2coco")]
#[command(version, about)]
struct Cli {
    /// The root path of images.
    img_path: PathBuf,

    /// Text file holding the class list, one class per line.
    classes: PathBuf,

    /// Output annotation file name (must end with .json). It is saved in
    /// the `annotations` directory next to IMG_PATH.
    out: String,

    /// Suffixes of files to exclude, such as "png" and "bmp".
    #[arg(short = 'e', long = "exclude-extensions", num_args = 1..)]
    exclude_extensions: Vec<String>,
}

/// Run the images2coco CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Images2CocoError> {
    let cli = Cli::parse();

    let config = ConvertConfig::new(
        cli.img_path,
        cli.classes,
        cli.out,
        &cli.exclude_extensions,
    )?;

    let save_path = convert(&config)?;
    println!("save json file: {}", save_path.display());
    Ok(())
}

/// Runs the full conversion described by `config` and returns the path written.
///
/// Nothing is written unless every image was read and the document
/// assembled without error.
pub fn convert(config: &ConvertConfig) -> Result<PathBuf, Images2CocoError> {
    info!(
        image_root = %config.image_root.display(),
        excluded = ?config.exclude_extensions,
        "scanning images"
    );

    // 1. image list
    let image_infos = scan::collect_image_infos(&config.image_root, &config.exclude_extensions)?;

    // 2. COCO document
    let classes = classes::load_class_list(&config.classes_path)?;
    let document = coco::build_coco_document(&image_infos, &classes)?;

    // 3. dump
    let save_path = config.output_path();
    coco::io_coco_json::write_coco_json(&save_path, &document)?;

    Ok(save_path)
}
