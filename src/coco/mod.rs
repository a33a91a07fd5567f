//! Strongly-typed COCO manifest model, assembly, and JSON output.
//!
//! The manifest produced here is the `images`/`categories` subset of the
//! COCO instances schema, with empty `annotations`, `info` and `licenses`
//! lists left for annotation tooling to fill in.
//!
//! # Example
//!
//! ```
//! use images2coco::coco::{build_coco_document, ImageInfo};
//!
//! let images = vec![ImageInfo::new("a.jpg", 100, 50)];
//! let doc = build_coco_document(&images, &["cat", "dog"])?;
//!
//! assert_eq!(doc.images[0].id.as_u64(), 0);
//! assert_eq!(doc.categories[1].name, "dog");
//! # Ok::<(), images2coco::Images2CocoError>(())
//! ```

mod assemble;
mod ids;
pub mod io_coco_json;
mod model;

pub use assemble::build_coco_document;
pub use ids::{CategoryId, ImageId};
pub use model::{
    CategoryItem, CocoDocument, DocumentType, ImageInfo, ImageItem, DEFAULT_SUPERCATEGORY,
};
