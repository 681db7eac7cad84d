/// Runs both passes over the media folder, one file at a time:
/// posters for every video first, then placeholders for every image.

use std::path::PathBuf;

use crate::config::AssetConfig;
use crate::error::AssetResult;
use crate::media::{poster, thumbnail, AssetOutcome};
use crate::scan;

/// Result for a single source file
#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub outcome: AssetResult<AssetOutcome>,
}

/// Everything a run did, in processing order
#[derive(Debug, Default)]
pub struct RunReport {
    pub posters: Vec<FileReport>,
    pub thumbnails: Vec<FileReport>,
}

/// Generate all missing posters and placeholders under `config.media_dir`.
///
/// Per-file failures are printed and recorded, never propagated; a missing
/// media folder just means there is nothing to do.
pub fn run(config: &AssetConfig) -> RunReport {
    let mut report = RunReport::default();

    println!("=== Generating Video Posters ===");
    for video in scan::find_videos(config) {
        let outcome = poster::process_video(&video, config);
        report.posters.push(FileReport { source: video, outcome });
    }

    println!("\n=== Generating LQIP Thumbnails ===");
    for image in scan::find_images(config) {
        let outcome = thumbnail::process_image(&image, config);
        report.thumbnails.push(FileReport { source: image, outcome });
    }

    println!("\n✅ Done!");

    report
}
