use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{AssetError, AssetResult};

/// Encode `image` as JPEG and place it at `path`.
///
/// The image is encoded fully in memory first, then written to a hidden temp
/// file in the destination folder and renamed over `path`. A failure at any
/// step leaves nothing at `path`.
pub fn write_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> AssetResult<()> {
    let mut encoded = Vec::new();
    image.write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, quality))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&encoded)?;
    staged.flush()?;

    staged.persist(path).map_err(|e| AssetError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_jpeg_creates_decodable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 4, Rgb([200, 10, 10])));

        write_jpeg(&image, &path, 80).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 4));
        // Only the finished file is left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_encode_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");
        // JPEG cannot carry 16-bit RGBA
        let image = DynamicImage::new_rgba16(4, 4);

        assert!(write_jpeg(&image, &path, 80).is_err());
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.jpg");
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));

        assert!(matches!(write_jpeg(&image, &path, 80), Err(AssetError::Io(_))));
    }
}
