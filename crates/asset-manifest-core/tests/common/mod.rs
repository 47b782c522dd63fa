#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create a file with dummy data at `root/relative`, creating parent directories
pub fn create_test_file(root: &Path, relative: &str) -> PathBuf {
    let file_path = root.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let mut file = File::create(&file_path).unwrap();
    // Write some dummy data to simulate an image
    file.write_all(b"DUMMY IMAGE DATA").unwrap();
    file_path
}

/// Create every file in `relatives` under `root`
pub fn create_test_files(root: &Path, relatives: &[&str]) -> Vec<PathBuf> {
    relatives
        .iter()
        .map(|relative| create_test_file(root, relative))
        .collect()
}

/// A small icon set with nested directories and some non-image files
pub fn create_icon_set(root: &Path) -> Vec<PathBuf> {
    create_test_files(
        root,
        &[
            "logo_32.png",
            "logo_32.svg",
            "logo_64.png",
            "my_icon.png",
            "icon16_128.png",
            "readme.txt",
            "photo.jpg",
            "LICENSE",
            "sub/dir/icon.png",
            "sub/dir/icon.svg",
            "sub/arrow_left_16.svg",
        ],
    )
}
