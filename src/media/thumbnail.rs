use image::{imageops::FilterType, DynamicImage, ImageReader, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

use super::{output, replace_extension, AssetOutcome};
use crate::config::AssetConfig;
use crate::error::{AssetError, AssetResult};

/// Get the placeholder path for an image: `<dir>/thumbnails/<name>.jpg`
pub fn thumbnail_path(image: &Path, config: &AssetConfig) -> PathBuf {
    let dir = image.parent().unwrap_or_else(|| Path::new(""));
    let file_name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    dir.join(&config.thumbnail_dir)
        .join(replace_extension(&file_name, ".jpg"))
}

/// Placeholder dimensions: fixed width, height scaled to keep the aspect
/// ratio and rounded down
pub fn target_size(width: u32, height: u32, target_width: u32) -> AssetResult<(u32, u32)> {
    if width == 0 || target_width == 0 {
        return Err(AssetError::EmptyTarget { width: target_width, height: 0 });
    }

    let scaled = u64::from(target_width) * u64::from(height) / u64::from(width);
    let target_height = u32::try_from(scaled).unwrap_or(u32::MAX);

    if target_height == 0 {
        return Err(AssetError::EmptyTarget { width: target_width, height: 0 });
    }

    Ok((target_width, target_height))
}

/// Generate the blur-up placeholder for `image` unless it already exists
pub fn create_thumbnail(image: &Path, config: &AssetConfig) -> AssetResult<AssetOutcome> {
    let thumb_path = thumbnail_path(image, config);
    if thumb_path.exists() {
        return Ok(AssetOutcome::Skipped(thumb_path));
    }

    if let Some(thumb_dir) = thumb_path.parent() {
        fs::create_dir_all(thumb_dir)?;
    }

    // Decoder handle is dropped as soon as the pixels are in memory
    let source = ImageReader::open(image)?.with_guessed_format()?.decode()?;

    let (width, height) = target_size(source.width(), source.height(), config.thumbnail_width)?;

    // Flatten at full size so color hidden under alpha=0 never bleeds into
    // the resampled edges
    let thumbnail = flatten(source, config.background)
        .resize_exact(width, height, FilterType::Lanczos3);

    output::write_jpeg(&thumbnail, &thumb_path, config.thumbnail_quality)?;

    Ok(AssetOutcome::Created(thumb_path))
}

/// Create the placeholder and print its status line
pub fn process_image(image: &Path, config: &AssetConfig) -> AssetResult<AssetOutcome> {
    let result = create_thumbnail(image, config);
    announce(image, &result);
    result
}

/// Library entry point: process one image and return the placeholder path.
/// Returns None if the image could not be processed
pub fn generate_thumbnail(image: &Path, config: &AssetConfig) -> Option<PathBuf> {
    process_image(image, config).ok().map(AssetOutcome::into_path)
}

fn announce(image: &Path, result: &AssetResult<AssetOutcome>) {
    match result {
        Ok(AssetOutcome::Created(path)) => println!("  📸 Created thumbnail: {}", path.display()),
        Ok(AssetOutcome::Skipped(path)) => println!("  ⏭️  Skipping (exists): {}", path.display()),
        Err(e) => eprintln!("  ❌ ERROR generating thumbnail for {}: {}", image.display(), e),
    }
}

/// Composite transparent pixels over an opaque background.
///
/// Images without alpha come back as 8-bit RGB (or unchanged if they are
/// already 8-bit gray or RGB).
pub fn flatten(image: DynamicImage, background: [u8; 3]) -> DynamicImage {
    if !image.color().has_alpha() {
        return match image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
    }

    let rgba = image.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, alpha] = pixel.0;
        flat.put_pixel(
            x,
            y,
            Rgb([
                blend(r, background[0], alpha),
                blend(g, background[1], alpha),
                blend(b, background[2], alpha),
            ]),
        );
    }

    DynamicImage::ImageRgb8(flat)
}

/// Alpha-weighted mix of one channel, rounded to nearest
fn blend(source: u8, background: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let mixed = u32::from(source) * alpha + u32::from(background) * (255 - alpha);
    ((mixed + 127) / 255) as u8
}
