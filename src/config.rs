/// Settings shared by the poster and thumbnail generators
///
/// The defaults match the site the assets are generated for. Every operation
/// takes an `AssetConfig` so tests can point at a temporary folder or use a
/// different thumbnail width.

use std::path::PathBuf;

/// Folder scanned for media, relative to the working directory
pub const MEDIA_DIR: &str = "media";

/// Width of the blur-up placeholder in pixels (height follows aspect ratio)
pub const THUMBNAIL_WIDTH: u32 = 20;

/// JPEG quality for placeholders
pub const THUMBNAIL_QUALITY: u8 = 60;

/// JPEG quality for poster frames
pub const POSTER_QUALITY: u8 = 95;

/// Page background color, used to flatten transparent pixels
pub const BACKGROUND: [u8; 3] = [13, 26, 20];

/// Subfolder (next to each image) that holds its placeholder
pub const THUMBNAIL_DIR: &str = "thumbnails";

/// Replaces the extension of a video to name its poster
pub const POSTER_SUFFIX: &str = "-poster.jpg";

/// Video extensions (case-sensitive)
pub const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "mov"];

/// Image extensions (case-sensitive)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq)]
pub struct AssetConfig {
    /// Root folder to scan
    pub media_dir: PathBuf,
    pub thumbnail_width: u32,
    pub thumbnail_quality: u8,
    pub poster_quality: u8,
    /// RGB color composited under transparent pixels
    pub background: [u8; 3],
    pub thumbnail_dir: String,
    pub poster_suffix: String,
    pub video_extensions: Vec<String>,
    pub image_extensions: Vec<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from(MEDIA_DIR),
            thumbnail_width: THUMBNAIL_WIDTH,
            thumbnail_quality: THUMBNAIL_QUALITY,
            poster_quality: POSTER_QUALITY,
            background: BACKGROUND,
            thumbnail_dir: THUMBNAIL_DIR.to_string(),
            poster_suffix: POSTER_SUFFIX.to_string(),
            video_extensions: VIDEO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl AssetConfig {
    /// Default settings rooted at a different media folder
    pub fn with_media_dir(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
            ..Self::default()
        }
    }
}
