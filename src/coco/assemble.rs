//! Assembly of the COCO manifest from scanned images and a class list.

use std::collections::HashMap;

use tracing::debug;

use super::ids::{CategoryId, ImageId};
use super::model::{CategoryItem, CocoDocument, ImageInfo, ImageItem};
use crate::error::Images2CocoError;

/// Builds the manifest.
///
/// Category ids are list positions and image ids are processing positions,
/// both starting at 0. Two images with the same `filename` abort assembly
/// with [`Images2CocoError::DuplicateFileName`].
pub fn build_coco_document<S: AsRef<str>>(
    image_infos: &[ImageInfo],
    classes: &[S],
) -> Result<CocoDocument, Images2CocoError> {
    let categories = classes
        .iter()
        .enumerate()
        .map(|(idx, name)| CategoryItem::new(CategoryId::new(idx as u64), name.as_ref()))
        .collect();

    let mut seen: HashMap<&str, ImageId> = HashMap::with_capacity(image_infos.len());
    let mut images = Vec::with_capacity(image_infos.len());

    for (idx, info) in image_infos.iter().enumerate() {
        let id = ImageId::new(idx as u64);

        if let Some(first_id) = seen.insert(info.filename.as_str(), id) {
            return Err(Images2CocoError::DuplicateFileName {
                file_name: info.filename.clone(),
                first_id: first_id.as_u64(),
            });
        }

        debug!(%id, file_name = %info.filename, "assigned image id");
        images.push(ImageItem::new(
            id,
            info.filename.clone(),
            info.width,
            info.height,
        ));
    }

    Ok(CocoDocument::new(images, categories))
}
