use serde::{Deserialize, Serialize};

/// A single image inside a photo set, as the front-end consumes it.
///
/// `src` is a URL path under the image mount prefix; `alt` is a label
/// derived from the filename (extension stripped, hyphens to spaces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// A named group of images, one per subdirectory of the picture root.
///
/// Sets with no qualifying images are never emitted. Image order is
/// whatever the filesystem enumeration produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSet {
    pub name: String,
    pub images: Vec<ImageRef>,
}
