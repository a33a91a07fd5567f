#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use images2coco::coco::ImageInfo;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub const EXTENSIONS: &[&str] = &["jpg", "JPG", "jpeg", "png", "PNG", "bmp", "tif", "webp"];

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Relative `/`-separated file paths, unique even on case-insensitive file systems.
///
/// Directories never carry an extension and files always do, so no path is
/// both a file and a directory.
pub fn arb_file_tree(max_files: usize) -> impl Strategy<Value = Vec<String>> {
    let dir = prop::sample::select(vec!["", "sub/", "sub/deep/", "other/", "z/"]);
    let ext = prop::sample::select(EXTENSIONS.to_vec());

    prop::collection::vec((dir, ext), 0..=max_files).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, (dir, ext))| format!("{dir}img_{idx:03}.{ext}"))
            .collect()
    })
}

/// A subset of lowercase suffixes to exclude.
pub fn arb_exclusions() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(vec!["jpg", "png", "bmp", "g", ".tif", ""], 0..=3)
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

/// Image infos with unique file names and positive dimensions.
pub fn arb_image_infos(max_images: usize) -> impl Strategy<Value = Vec<ImageInfo>> {
    prop::collection::btree_set("[a-z]{1,6}(/[a-z]{1,6})?\\.(jpg|png)", 0..=max_images)
        .prop_flat_map(|names: BTreeSet<String>| {
            let n = names.len();
            (
                Just(names.into_iter().collect::<Vec<_>>()),
                prop::collection::vec((1u32..=8192, 1u32..=8192), n),
            )
        })
        .prop_map(|(names, dims)| {
            names
                .into_iter()
                .zip(dims)
                .map(|(name, (w, h))| ImageInfo::new(name, w, h))
                .collect()
        })
}

/// Class names, duplicates allowed.
pub fn arb_classes(max_classes: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z ]{0,10}[a-z]", 0..=max_classes)
}

pub fn touch_all(root: &Path, rel_paths: &[String]) {
    for rel in rel_paths {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, b"x").expect("write file");
    }
}

/// Order in which a name-sorted depth-first walk visits `paths`.
pub fn walk_order(mut paths: Vec<String>) -> Vec<String> {
    paths.sort_by(|a, b| a.split('/').cmp(b.split('/')));
    paths
}
