use crate::models::{ImageRef, PhotoSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions that qualify a file as a photo-set member. Matching is
/// case-sensitive: `photo.JPG` is not picked up.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// A filesystem failure while enumerating the picture root. The scan is
/// all-or-nothing: any error aborts it rather than producing a partial
/// listing.
#[derive(Debug, Error)]
#[error("failed to scan '{}': {source}", path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ScanError {
    fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Walk the picture root and build the photo-set catalog.
///
/// Each immediate subdirectory of `root` becomes a [`PhotoSet`] named after
/// it (first character uppercased), holding one [`ImageRef`] per qualifying
/// image file directly inside it. Subdirectories without qualifying images
/// are omitted. Nothing is cached; every call re-reads the filesystem.
pub fn scan_photo_sets(root: &Path, mount_prefix: &str) -> Result<Vec<PhotoSet>, ScanError> {
    let mut sets = Vec::new();

    for entry in fs::read_dir(root).map_err(|e| ScanError::new(root, e))? {
        let entry = entry.map_err(|e| ScanError::new(root, e))?;
        let subdir = entry.path();
        if !subdir.is_dir() {
            continue;
        }
        let Some(dir_name) = subdir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let images = scan_images(&subdir, dir_name, mount_prefix)?;
        if !images.is_empty() {
            sets.push(PhotoSet {
                name: display_name(dir_name),
                images,
            });
        }
    }

    Ok(sets)
}

/// Non-recursive: only the immediate contents of `subdir` are considered.
fn scan_images(
    subdir: &Path,
    dir_name: &str,
    mount_prefix: &str,
) -> Result<Vec<ImageRef>, ScanError> {
    let mut images = Vec::new();

    for entry in fs::read_dir(subdir).map_err(|e| ScanError::new(subdir, e))? {
        let entry = entry.map_err(|e| ScanError::new(subdir, e))?;
        let path = entry.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        images.push(ImageRef {
            // Forward slashes regardless of host platform; the path is a URL.
            src: format!("{mount_prefix}/{dir_name}/{file_name}"),
            alt: alt_text(file_name),
        });
    }

    Ok(images)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// `sunset-beach.jpg` -> `sunset beach`
pub fn alt_text(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.replace('-', " ")
}

/// Uppercase the first character, leave the rest untouched:
/// `summer-2024` -> `Summer-2024`.
pub fn display_name(dir_name: &str) -> String {
    let mut chars = dir_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
