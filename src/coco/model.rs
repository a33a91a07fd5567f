//! Document model for an annotation-free COCO manifest.
//!
//! Field names and nesting follow the COCO instances schema. Only the
//! `images` and `categories` lists carry data; the remaining top-level
//! lists are emitted empty so annotation tooling has somewhere to write.

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ImageId};

/// Supercategory written for every category.
pub const DEFAULT_SUPERCATEGORY: &str = "none";

/// Metadata gathered for one scanned image, before ids are assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Path relative to the image root, `/`-separated.
    pub filename: String,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl ImageInfo {
    /// Creates image metadata for a path relative to the image root.
    pub fn new(filename: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
        }
    }
}

/// The complete manifest as written to disk.
///
/// Field order here is the key order in the serialized JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocoDocument {
    pub images: Vec<ImageItem>,

    pub categories: Vec<CategoryItem>,

    /// Always empty when produced by this crate.
    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,

    /// Always empty when produced by this crate.
    #[serde(default)]
    pub info: Vec<serde_json::Value>,

    /// Always empty when produced by this crate.
    #[serde(default)]
    pub licenses: Vec<serde_json::Value>,

    #[serde(rename = "type")]
    pub kind: DocumentType,
}

impl CocoDocument {
    /// Creates a document with the given images and categories and empty placeholder lists.
    pub fn new(images: Vec<ImageItem>, categories: Vec<CategoryItem>) -> Self {
        Self {
            images,
            categories,
            annotations: Vec::new(),
            info: Vec::new(),
            licenses: Vec::new(),
            kind: DocumentType::Instance,
        }
    }
}

/// Value of the top-level `type` key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Instance,
}

/// An entry of the `images` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub id: ImageId,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl ImageItem {
    /// Creates an `images` entry.
    pub fn new(
        id: impl Into<ImageId>,
        file_name: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            width,
            height,
        }
    }
}

/// An entry of the `categories` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: CategoryId,
    pub name: String,
    pub supercategory: String,
}

impl CategoryItem {
    /// Creates a category with the default `"none"` supercategory.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supercategory: DEFAULT_SUPERCATEGORY.to_string(),
        }
    }
}
